// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error, warn};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    error::{self, Error, Result},
    model::{AttendanceRecord, IndexNumber, Student},
};

/// The read-only operations this client needs from the attendance service.
///
/// None of these fail. Lookups that cannot be completed come back as "not
/// found" or empty, since all the user can do about it is try again.
#[async_trait]
pub(crate) trait Api: Send + Sync {
    async fn student_exists(&self, index: &IndexNumber) -> bool;
    async fn fetch_student(&self, index: &IndexNumber) -> Option<Student>;
    async fn fetch_attendances(&self, index: &IndexNumber) -> Vec<AttendanceRecord>;
    async fn health_check(&self) -> bool;
}

#[async_trait]
impl<T: Api + ?Sized> Api for Arc<T> {
    async fn student_exists(&self, index: &IndexNumber) -> bool {
        (**self).student_exists(index).await
    }

    async fn fetch_student(&self, index: &IndexNumber) -> Option<Student> {
        (**self).fetch_student(index).await
    }

    async fn fetch_attendances(&self, index: &IndexNumber) -> Vec<AttendanceRecord> {
        (**self).fetch_attendances(index).await
    }

    async fn health_check(&self) -> bool {
        (**self).health_check().await
    }
}

pub(crate) struct HttpApi {
    client: reqwest::Client,
    base: Url,
}

impl HttpApi {
    pub(crate) fn new(base: Url) -> Result<Self> {
        if base.cannot_be_a_base() {
            return Err(error::Conversion::BaseUrl(base).into());
        }

        Ok(Self {
            client: reqwest::Client::new(),
            base,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            let _ = path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get(&self, segments: &[&str]) -> Result<reqwest::Response> {
        let url = self.endpoint(segments);
        debug!("GET {}", url);
        Ok(self.client.get(url).send().await?.error_for_status()?)
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        Ok(self.get(segments).await?.json().await?)
    }
}

/// A plain error status is an expected answer from the service; everything
/// else means we never got one.
fn report(what: &str, err: &Error) {
    // LINT: Any other kind of failure means the service was not reached.
    #[allow(clippy::wildcard_enum_match_arm)]
    match *err {
        Error::Http(ref e) if e.status().is_some() => debug!("{} was refused: {}", what, err),
        _ => error!("{} failed: {}", what, err),
    }
}

#[async_trait]
impl Api for HttpApi {
    async fn student_exists(&self, index: &IndexNumber) -> bool {
        match self.get(&["students", index.as_str()]).await {
            Ok(_) => true,
            Err(e) => {
                report("Checking student", &e);
                false
            }
        }
    }

    async fn fetch_student(&self, index: &IndexNumber) -> Option<Student> {
        self.get_json(&["students", index.as_str()])
            .await
            .map_err(|e| report("Fetching student data", &e))
            .ok()
    }

    async fn fetch_attendances(&self, index: &IndexNumber) -> Vec<AttendanceRecord> {
        let entries: Vec<serde_json::Value> = self
            .get_json(&["attendance", "student", index.as_str()])
            .await
            .map_err(|e| report("Fetching attendance", &e))
            .unwrap_or_default();

        // One unreadable record must not hide the rest.
        entries
            .into_iter()
            .enumerate()
            .filter_map(|(position, entry)| match serde_json::from_value(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("Skipping attendance record #{} we could not read: {}", position, e);
                    None
                }
            })
            .collect()
    }

    async fn health_check(&self) -> bool {
        match self.get(&["health"]).await {
            Ok(_) => true,
            Err(e) => {
                warn!("The attendance service may be unavailable: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    use super::*;
    use crate::model::Status;

    struct Route {
        path: &'static str,
        status: u16,
        body: &'static str,
    }

    const STUDENT: &str =
        r#"{"indexNumber":"123456","firstName":"Anna","lastName":"Nowak","groupName":"INF-2"}"#;

    /// Answers every connection with the matching canned route (404 otherwise)
    /// and records the requested paths.
    async fn serve(routes: Vec<Route>) -> (Url, Arc<Mutex<Vec<String>>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        let routes = Arc::new(routes);

        let _ = tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let routes = Arc::clone(&routes);
                let log = Arc::clone(&log);
                let _ = tokio::spawn(async move {
                    let mut request = Vec::new();
                    let mut buf = [0_u8; 1024];
                    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                        let n = socket.read(&mut buf).await.unwrap();
                        if n == 0 {
                            return;
                        }
                        request.extend_from_slice(&buf[..n]);
                    }
                    let head = String::from_utf8_lossy(&request);
                    let path = head.split_whitespace().nth(1).unwrap_or("").to_owned();
                    let (status, body) = routes
                        .iter()
                        .find(|r| r.path == path)
                        .map_or((404, ""), |r| (r.status, r.body));
                    log.lock().unwrap().push(path);

                    let response = format!(
                        "HTTP/1.1 {status} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    socket.write_all(response.as_bytes()).await.unwrap();
                    socket.shutdown().await.unwrap();
                });
            }
        });

        (
            Url::parse(&format!("http://{addr}/api")).unwrap(),
            seen,
        )
    }

    fn index() -> IndexNumber {
        "123456".parse().unwrap()
    }

    #[tokio::test]
    async fn finds_student() {
        let (url, seen) = serve(vec![Route {
            path: "/api/students/123456",
            status: 200,
            body: STUDENT,
        }])
        .await;
        let api = HttpApi::new(url).unwrap();

        assert!(api.student_exists(&index()).await);
        let student = api.fetch_student(&index()).await.unwrap();
        assert_eq!(student.full_name(), "Anna Nowak");
        assert_eq!(
            *seen.lock().unwrap(),
            ["/api/students/123456", "/api/students/123456"]
        );
    }

    #[tokio::test]
    async fn missing_student() {
        let (url, _) = serve(vec![]).await;
        let api = HttpApi::new(url).unwrap();

        assert!(!api.student_exists(&index()).await);
        assert_eq!(api.fetch_student(&index()).await, None);
    }

    #[tokio::test]
    async fn unparsable_student_is_absent() {
        let (url, _) = serve(vec![Route {
            path: "/api/students/123456",
            status: 200,
            body: r#"{"indexNumber":"123456"}"#,
        }])
        .await;
        let api = HttpApi::new(url).unwrap();

        assert!(api.student_exists(&index()).await);
        assert_eq!(api.fetch_student(&index()).await, None);
    }

    #[tokio::test]
    async fn fetches_attendances() {
        let (url, _) = serve(vec![Route {
            path: "/api/attendance/student/123456",
            status: 200,
            body: r#"[{"status":"PRESENT","markedAt":"2026-10-16T09:31:00","schedule":{"subject":"Networks","startTime":"2026-10-16T09:30:00","endTime":"2026-10-16T11:00:00"}}]"#,
        }])
        .await;
        let api = HttpApi::new(url).unwrap();

        let records = api.fetch_attendances(&index()).await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, Status::Present);
    }

    #[tokio::test]
    async fn unreadable_attendance_is_skipped() {
        let (url, _) = serve(vec![Route {
            path: "/api/attendance/student/123456",
            status: 200,
            body: r#"[
                {"status":"PRESENT","markedAt":"2026-10-16T09:31:00","schedule":{"subject":"Networks","startTime":"2026-10-16T09:30:00","endTime":"2026-10-16T11:00:00"}},
                {"status":"LATE","markedAt":"last week","schedule":{"subject":"Databases","startTime":"2026-10-09T09:30:00","endTime":"2026-10-09T11:00:00"}},
                {"status":"ABSENT","markedAt":"2026-10-02","schedule":{"subject":"Compilers","startTime":1760600000000,"endTime":"2026-10-02T11:00:00"}}
            ]"#,
        }])
        .await;
        let api = HttpApi::new(url).unwrap();

        let records = api.fetch_attendances(&index()).await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].schedule.subject, "Networks");
        assert_eq!(records[1].schedule.subject, "Compilers");
        assert_eq!(records[1].status, Status::Absent);
    }

    #[tokio::test]
    async fn attendance_failure_is_empty() {
        let (url, _) = serve(vec![Route {
            path: "/api/attendance/student/123456",
            status: 500,
            body: "{}",
        }])
        .await;
        let api = HttpApi::new(url).unwrap();

        assert!(api.fetch_attendances(&index()).await.is_empty());
    }

    #[tokio::test]
    async fn health() {
        let (url, seen) = serve(vec![Route {
            path: "/api/health",
            status: 200,
            body: "",
        }])
        .await;
        assert!(HttpApi::new(url).unwrap().health_check().await);
        assert_eq!(*seen.lock().unwrap(), ["/api/health"]);

        let (url, _) = serve(vec![]).await;
        assert!(!HttpApi::new(url).unwrap().health_check().await);
    }

    #[tokio::test]
    async fn unreachable_service_fails_soft() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let api = HttpApi::new(Url::parse(&format!("http://{addr}/api")).unwrap()).unwrap();

        assert!(!api.student_exists(&index()).await);
        assert_eq!(api.fetch_student(&index()).await, None);
        assert!(api.fetch_attendances(&index()).await.is_empty());
        assert!(!api.health_check().await);
    }

    #[test]
    fn endpoints_tolerate_trailing_slash() {
        let api = HttpApi::new(Url::parse("http://localhost:8080/api/").unwrap()).unwrap();
        assert_eq!(
            api.endpoint(&["attendance", "student", "123456"]).as_str(),
            "http://localhost:8080/api/attendance/student/123456"
        );
    }

    #[test]
    fn rejects_unusable_base() {
        let base = Url::parse("mailto:someone@example.com").unwrap();
        assert!(matches!(
            HttpApi::new(base),
            Err(Error::Conversion(error::Conversion::BaseUrl(_)))
        ));
    }
}
