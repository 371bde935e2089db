#[cfg(test)]
mod common;

#[cfg(test)]
mod health_tests;

#[cfg(test)]
mod session_tests;

#[cfg(test)]
mod accounts_tests;

#[cfg(test)]
mod docs_tests;
