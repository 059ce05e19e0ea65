//! canvasfix-core: rewrites wasm-bindgen glue so 2D contexts from an
//! `OffscreenCanvas` pass the generated `instanceof` check.
//!
//! wasm-bindgen emits `instanceof CanvasRenderingContext2D` for
//! `web_sys::CanvasRenderingContext2D` casts, which rejects the
//! `OffscreenCanvasRenderingContext2D` handed out inside workers
//! (rustwasm/wasm-bindgen#1614). Run this once after `wasm-pack build`.
//!
//! ## Pieces
//!
//! - [`rule`]: the fixed literal pair and the pure first-match replace.
//! - [`artifact`]: read-modify-write of the glue file on disk.
//! - [`output`]: plain and JSON rendering of a [`artifact::PatchReport`].
//!
//! ```rust,no_run
//! use canvasfix_core::artifact::patch;
//!
//! let report = patch()?;
//! println!("{:?}", report.outcome);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod artifact;
pub mod output;
pub mod rule;
