use std::path::{Path, PathBuf};

use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};

use super::file_loader::{self, LoadError};
use crate::extract::{ExtractError, Extractor};
use crate::frontend::Frontend;
use crate::graph::GraphExtraction;
use crate::seq::SeqExtraction;

/// Why one file of a corpus produced no sample.
#[derive(Debug, Error)]
pub enum SampleError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// One extracted source file.
#[derive(Debug, Clone)]
pub struct CorpusSample<T> {
    pub path: PathBuf,
    pub extraction: T,
}

#[derive(Debug)]
pub struct CorpusFailure {
    pub path: PathBuf,
    pub error: SampleError,
}

/// Extractions of every source file below a directory. Files that fail
/// to load or parse are set aside without affecting the others.
#[derive(Debug)]
pub struct Corpus<T> {
    pub samples: Vec<CorpusSample<T>>,
    pub failures: Vec<CorpusFailure>,
}

impl<T> Corpus<T> {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn sample(&self, path: &Path) -> Option<&T> {
        self.samples
            .iter()
            .find(|s| s.path == path)
            .map(|s| &s.extraction)
    }
}

/// Runs an [`Extractor`] over directories of source files.
pub struct CorpusLoader<'a, F> {
    extractor: &'a Extractor<F>,
}

impl<'a, F: Frontend + Sync> CorpusLoader<'a, F> {
    pub fn new(extractor: &'a Extractor<F>) -> Self {
        Self { extractor }
    }

    /// Graph representations of every source file below `dir`.
    pub fn load_graphs(&self, dir: impl AsRef<Path>) -> Result<Corpus<GraphExtraction>, LoadError> {
        self.load(dir.as_ref(), |extractor, source| extractor.graph_from_string(source))
    }

    /// Sequence representations of every source file below `dir`.
    pub fn load_seqs(&self, dir: impl AsRef<Path>) -> Result<Corpus<SeqExtraction>, LoadError> {
        self.load(dir.as_ref(), |extractor, source| extractor.seq_from_string(source))
    }

    /// Graph representation of a single source file.
    pub fn load_graph_file(&self, path: impl AsRef<Path>) -> Result<GraphExtraction, SampleError> {
        let source = file_loader::load_file(path.as_ref())?;
        Ok(self.extractor.graph_from_string(&source)?)
    }

    fn load<T, E>(&self, dir: &Path, extract: E) -> Result<Corpus<T>, LoadError>
    where
        T: Send,
        E: Fn(&Extractor<F>, &str) -> Result<T, ExtractError> + Sync,
    {
        let paths = file_loader::collect_file_paths(dir)?;
        let results: Vec<(PathBuf, Result<T, SampleError>)> = paths
            .into_par_iter()
            .map(|path| {
                let result = file_loader::load_file(&path)
                    .map_err(SampleError::from)
                    .and_then(|source| Ok(extract(self.extractor, &source)?));
                (path, result)
            })
            .collect();

        let mut corpus = Corpus {
            samples: Vec::new(),
            failures: Vec::new(),
        };
        for (path, result) in results {
            match result {
                Ok(extraction) => corpus.samples.push(CorpusSample { path, extraction }),
                Err(error) => {
                    warn!(path = %path.display(), %error, "skipping source file");
                    corpus.failures.push(CorpusFailure { path, error });
                }
            }
        }
        debug!(
            dir = %dir.display(),
            samples = corpus.samples.len(),
            failures = corpus.failures.len(),
            "corpus loaded"
        );
        Ok(corpus)
    }
}
