//! Export core modules shared across CLI and WASM wrappers.

pub mod pdf_core;
pub mod pdf_export;

pub use pdf_core::{plan_pages, PageGeometry, PdfPlan, Placement, RasterOptions};
pub use pdf_export::{export_pdf_with_flag, generate_pdf, pdf_file_name, PdfBackend, RasterImage};
