//! Text normalization for CMED catalog entries and procurement notices.
//!
//! Both sides of a match must go through the same normalizer so that their
//! token sequences are comparable. Lookup tables live in a [`Lexicon`] that is
//! injected into the [`Normalizer`]; the option set chooses which steps run.
//!
//! ```ignore
//! use cmed_normalize::{Lexicon, NormalizeOptions, Normalizer};
//!
//! let normalizer = Normalizer::new(Lexicon::builtin());
//! let options = NormalizeOptions::notice_description();
//! let text = normalizer.normalize("Dipirona Sódica 500mg", &options);
//! assert_eq!(text, "dipirona sodica 500 mg");
//! ```

mod lexicon;
mod normalizer;
mod options;
pub mod tables;

pub use lexicon::{Lexicon, LexiconEntries};
pub use normalizer::Normalizer;
pub use options::{NormalizeOptions, StopwordVariant};
