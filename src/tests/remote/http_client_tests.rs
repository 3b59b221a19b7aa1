use super::*;

#[test]
fn refused_connections_are_retried_then_reported() {
    let client = reqwest::blocking::Client::new();
    let mut attempts = 0;
    let err = with_retries("GET /healthz", || {
        attempts += 1;
        client.get("http://127.0.0.1:1/healthz").send()
    })
    .unwrap_err();

    assert_eq!(attempts, 3);
    assert!(format!("{:#}", err).starts_with("GET /healthz: "));
}

#[test]
fn other_request_errors_are_not_retried() {
    let client = reqwest::blocking::Client::new();
    let mut attempts = 0;
    let err = with_retries("POST /compare", || {
        attempts += 1;
        client.post("not a url").send()
    })
    .unwrap_err();

    assert_eq!(attempts, 1);
    assert!(format!("{:#}", err).starts_with("POST /compare"));
}
