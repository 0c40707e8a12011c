#[cfg(test)]
mod common;

#[cfg(test)]
mod dashboard_info_tests;

#[cfg(test)]
mod transport_failure_tests;
