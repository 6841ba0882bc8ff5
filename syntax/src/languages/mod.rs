//! Language grammars
//!
//! Single-pass scanners, one per supported language. Each covers every byte
//! of its input; anything a scanner cannot classify comes out as `Plain`.

mod batch;
mod css;
mod html;
mod python;

pub use batch::BatchGrammar;
pub use css::CssGrammar;
pub use html::HtmlGrammar;
pub use python::PythonGrammar;
