use std::sync::{Arc, Mutex};

use kulasis::auth::AuthInfo;
use kulasis::types::{DayPeriod, Semester, Weekday, WrapperError};
use kulasis::wrapper::KulasisWrapper;
use reqwest::Client;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// A canned response, served to any request whose path starts with `path`.
struct Route {
    path: &'static str,
    status: u16,
    body: &'static str,
}

/// The request lines and headers that the fake server received, one entry per request.
type Seen = Arc<Mutex<Vec<String>>>;

/// Starts a tiny HTTP server on a random local port that answers every connection with
/// the first matching route, then closes the connection.
///
/// # Returns
/// The base URL of the server and the requests it has seen so far.
async fn serve(routes: Vec<Route>) -> (String, Seen) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let seen: Seen = Arc::new(Mutex::new(vec![]));
    let seen_by_server = seen.clone();

    tokio::spawn(async move {
        loop {
            let (mut socket, _) = match listener.accept().await {
                Ok(s) => s,
                Err(_) => return,
            };

            let mut buf = vec![];
            let mut chunk = [0u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut chunk).await.unwrap_or(0);
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }

            let head = String::from_utf8_lossy(&buf).to_string();
            let target = head.split_whitespace().nth(1).unwrap_or("").to_string();
            seen_by_server.lock().unwrap().push(head);

            let (status, body) = routes
                .iter()
                .find(|r| target.starts_with(r.path))
                .map(|r| (r.status, r.body))
                .unwrap_or((404, "not found"));

            let response = format!(
                "HTTP/1.1 {status} X\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (format!("http://{addr}/api/app/v1"), seen)
}

fn get_wrapper(base_url: &str) -> KulasisWrapper {
    // Keep any proxy configured in the environment away from the local server.
    let client = Client::builder().no_proxy().build().unwrap();
    KulasisWrapper::builder()
        .with_client(client)
        .with_auth(AuthInfo::new("a0123456", "secret-token"))
        .with_user_agent("kulasis-test")
        .with_base_url(base_url)
        .unwrap()
        .try_build_wrapper()
        .unwrap()
}

#[tokio::test]
async fn test_time_slot_request() {
    let (base, seen) = serve(vec![Route {
        path: "/api/app/v1/timetable/get_table",
        status: 200,
        body: include_str!("json/timetable1.json"),
    }])
    .await;

    let wrapper = get_wrapper(&base);
    let slot = wrapper.get_time_slot().await.unwrap();
    assert_eq!(5, slot.get_all_lectures().len());
    assert_eq!(
        "Calculus A",
        slot.get_lecture(DayPeriod::new(Semester::First, Weekday::Monday, 1))
            .unwrap()
            .lecture_name
    );

    let seen = seen.lock().unwrap();
    assert_eq!(1, seen.len());
    let head = seen[0].to_lowercase();
    assert!(head.starts_with("get /api/app/v1/timetable/get_table "));
    assert!(head.contains("authorization: bearer secret-token\r\n"));
    assert!(head.contains("x-kulasis-account: a0123456\r\n"));
    assert!(head.contains("user-agent: kulasis-test\r\n"));
}

#[tokio::test]
async fn test_course_mail_requests() {
    let (base, seen) = serve(vec![
        Route {
            path: "/api/app/v1/timetable/get_table",
            status: 200,
            body: include_str!("json/timetable1.json"),
        },
        Route {
            path: "/api/app/v1/support/course_mail_list?",
            status: 200,
            body: include_str!("json/mail_list1.json"),
        },
        Route {
            path: "/api/app/v1/support/course_mail?",
            status: 200,
            body: include_str!("json/mail1.json"),
        },
    ])
    .await;

    let wrapper = get_wrapper(&base);
    let slot = wrapper.get_time_slot().await.unwrap();
    let lecture = slot.get_new_lectures()[0];

    let titles = wrapper.get_course_mail_titles(lecture).await.unwrap();
    assert_eq!(2, titles.len());
    assert_eq!(10, titles[1].department_no);
    assert_eq!(1001, titles[1].lecture_no);

    let mail = wrapper.get_course_mail(&titles[1]).await.unwrap();
    assert_eq!("Homework 2", mail.title);
    assert!(mail.text_body.contains("due on May 1"));

    let seen = seen.lock().unwrap();
    assert_eq!(3, seen.len());
    assert!(seen[1]
        .starts_with("GET /api/app/v1/support/course_mail_list?departmentNo=10&lectureNo=1001 "));
    assert!(seen[2].starts_with(
        "GET /api/app/v1/support/course_mail?departmentNo=10&lectureNo=1001&courseMailNo=305 "
    ));
}

#[tokio::test]
async fn test_time_slot_with_bad_cells() {
    let (base, _) = serve(vec![Route {
        path: "/api/app/v1/timetable/get_table",
        status: 200,
        body: include_str!("json/timetable_bad_cells.json"),
    }])
    .await;

    let slot = get_wrapper(&base).get_time_slot().await.unwrap();
    assert_eq!(
        "Statistics",
        slot.get_lecture(DayPeriod::new(Semester::First, Weekday::Tuesday, 1))
            .unwrap()
            .lecture_name
    );
}

#[tokio::test]
async fn test_rejected_credentials() {
    let (base, _) = serve(vec![Route {
        path: "/api/app/v1/timetable/get_table",
        status: 401,
        body: "{}",
    }])
    .await;

    let res = get_wrapper(&base).get_time_slot().await;
    assert!(matches!(res, Err(WrapperError::SessionNotValid)));
}

#[tokio::test]
async fn test_bad_status_code() {
    let (base, _) = serve(vec![Route {
        path: "/api/app/v1/timetable/get_table",
        status: 500,
        body: "maintenance",
    }])
    .await;

    match get_wrapper(&base).get_time_slot().await {
        Err(WrapperError::BadStatusCode(500, Some(ctx))) => assert_eq!("maintenance", ctx),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_json() {
    let (base, _) = serve(vec![Route {
        path: "/api/app/v1/timetable/get_table",
        status: 200,
        body: "<html>login</html>",
    }])
    .await;

    let res = get_wrapper(&base).get_time_slot().await;
    assert!(matches!(res, Err(WrapperError::SerdeError(_))));
}
