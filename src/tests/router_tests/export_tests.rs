use super::{body_bytes, get};

#[test]
fn export_downloads_the_filtered_view() {
    let resp = get("/export.xlsx?spa=1").expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let headers = resp.headers();
    assert_eq!(
        headers["Content-Type"],
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    let disposition = headers["Content-Disposition"].to_str().unwrap();
    assert!(disposition.contains("hotels_cancun.xlsx"));

    let body = body_bytes(resp);
    assert!(body.starts_with(b"PK"), "xlsx is a zip archive");
}
