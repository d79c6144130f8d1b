//! Corpus loading: extraction over directories of source files.

mod corpus_loader;
pub mod file_loader;

pub use corpus_loader::{Corpus, CorpusFailure, CorpusLoader, CorpusSample, SampleError};
pub use file_loader::LoadError;
