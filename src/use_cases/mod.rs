pub mod authorize;
pub mod login;
pub mod logout;

#[cfg(test)]
pub mod test_support;
