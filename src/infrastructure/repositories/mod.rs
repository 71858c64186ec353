pub mod pdf_extract_repository;
pub mod pdf_text_repository;

pub use pdf_extract_repository::PdfExtractRepository;
pub use pdf_text_repository::PdfTextRepository;
