//! # Velo Site
//!
//! Build toolchain for a single-page cycling portfolio. The site itself is
//! a hand-maintained `index.html`; these tools own the parts that are
//! generated: optimized image variants, and the content sections spliced
//! into marked regions of the template.
//!
//! # Architecture: Three One-Shot Tools
//!
//! ```text
//! 1. optimize   Pictures/          →  Pictures/optimized/   (resized JPEG/WebP variants)
//! 2. build      content.json + Pictures/  →  index.html     (all marked sections)
//! 3. gallery    Pictures/          →  index.html            (gallery region only)
//! ```
//!
//! Every tool is a one-shot, idempotent file transformation: read inputs,
//! write outputs, exit. There is no server and no state beyond the
//! filesystem — rerunning a tool with unchanged inputs changes nothing
//! (the optimizer skips up-to-date variants by modification time; the
//! builders resplice identical fragments).
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Fixed [`BuildConfig`](config::BuildConfig): paths, size classes, qualities, thresholds |
//! | [`scan`] | Image discovery — flat directory listing, extension filter, sorted |
//! | [`imaging`] | Pure image operations: dimension math, decode/resize/encode |
//! | [`optimize`] | Tool 1 — incremental thumb/medium × JPEG/WebP variant generation |
//! | [`content`] | Typed JSON content document with lazy per-section extraction |
//! | [`sections`] | Pure maud renderers, one per content section |
//! | [`template`] | Marker protocol: structural locate + splice + atomic write |
//! | [`site`] | Tool 2 — full JSON-driven build of every marked section |
//! | [`gallery`] | Tool 3 — strict gallery-only rebuild |
//! | [`output`] | Console line formatting (pure functions, testable) |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! Section fragments are generated with [Maud](https://maud.lambda.xyz/),
//! a compile-time HTML macro system. Malformed markup is a build error,
//! template variables are Rust expressions, and all interpolation is
//! auto-escaped — content document values can never break out of their
//! elements.
//!
//! ## Pure-Rust Imaging
//!
//! The [`imaging`] module uses the `image` crate (Lanczos3 resampling,
//! JPEG encoding) plus a lossy WebP encoder. No ImageMagick, no system
//! dependencies: the binary is fully self-contained.
//!
//! ## Markers, Not Templates
//!
//! The page is not generated from a template language — the tooling owns
//! only the regions between comment markers and preserves every other byte
//! of the file. Markers are located structurally (line scan for literal
//! tokens, exactly one pair per name), never with regular expressions, so
//! adversarial content inside a region cannot confuse the splice. The
//! update is computed fully in memory and written with a rename, so an
//! interrupted run never leaves a half-updated page.
//!
//! ## Fixed Configuration
//!
//! There are no flags and no config files. Directory names, size classes,
//! and quality levels are the [`Default`](config::BuildConfig) of one
//! immutable struct, constructed at process start and passed into each
//! stage — which is also what lets tests run the real pipeline against
//! temp directories.

pub mod config;
pub mod content;
pub mod gallery;
pub mod imaging;
pub mod optimize;
pub mod output;
pub mod scan;
pub mod sections;
pub mod site;
pub mod template;
