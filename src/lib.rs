#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `anmcolor` locates the color records embedded in `.anm` animation files,
//! decodes them into RGBA values and writes edits back into both copies of
//! every record.
//!
pub use anmcolor_internal::*;
