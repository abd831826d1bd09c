//! Cross-crate end-to-end scenarios.

#[cfg(test)]
mod jsonb_test;
#[cfg(test)]
mod session_test;
#[cfg(test)]
mod statement_cache_test;
#[cfg(test)]
mod unicode_test;
