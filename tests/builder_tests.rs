use std::time::Duration;

use kulasis::auth::AuthInfo;
use kulasis::wrapper::wrapper_builder::KulasisWrapperBuilder;
use reqwest::Client;

#[test]
fn fail_construct_wrapper() {
    let wrapper = KulasisWrapperBuilder::new()
        .with_client(Client::new())
        .with_default_timeout(Duration::from_secs(5))
        .try_build_wrapper();
    assert!(wrapper.is_none());
}

#[test]
fn success_construct_wrapper() {
    let wrapper = KulasisWrapperBuilder::new()
        .with_auth(AuthInfo::new("a0123456", "abc"))
        .with_user_agent("kulasis-test")
        .try_build_wrapper();
    assert!(wrapper.is_some());
    assert_eq!("a0123456", wrapper.unwrap().account());
}

#[test]
fn reject_bad_base_url() {
    assert!(KulasisWrapperBuilder::new()
        .with_base_url("not a url")
        .is_err());
    assert!(KulasisWrapperBuilder::new()
        .with_base_url("http://127.0.0.1:8080/api")
        .is_ok());
}
