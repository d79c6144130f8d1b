//! Corpus loading tests over temporary source trees.
