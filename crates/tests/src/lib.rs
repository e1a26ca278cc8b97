#[cfg(test)]
mod common;

#[cfg(test)]
mod role_gate_tests;

#[cfg(test)]
mod guest_gate_tests;

#[cfg(test)]
mod default_redirect_tests;

#[cfg(test)]
mod session_store_tests;

#[cfg(test)]
mod role_tests;
