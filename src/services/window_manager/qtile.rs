use crate::error::{FocusError, Result};
use crate::model::WindowId;
use once_cell::sync::OnceCell;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixStream;
use tokio::time::{timeout, Duration};
use tracing::{debug, info};

use super::detect::qtile_socket_path;
use super::r#trait::WindowManagerTrait;

const STATUS_SUCCESS: i64 = 0;
const STATUS_ERROR: i64 = 1;
const STATUS_EXCEPTION: i64 = 2;

/// Клиент командного IPC Qtile (JSON поверх Unix-сокета)
pub struct QtileClient {
    socket: OnceCell<PathBuf>,
    timeout: Duration,
}

impl QtileClient {
    /// `socket == None`: путь вычисляется из окружения при первом запросе
    pub fn new(socket: Option<PathBuf>, timeout: Duration) -> Self {
        let cell = OnceCell::new();
        if let Some(path) = socket {
            let _ = cell.set(path);
        }
        Self {
            socket: cell,
            timeout,
        }
    }

    fn socket(&self) -> &Path {
        self.socket
            .get_or_init(|| qtile_socket_path(|name| std::env::var(name).ok()))
    }

    async fn exchange(&self, request: &[u8]) -> Result<Vec<u8>> {
        let socket = self.socket();
        debug!("Подключение к Qtile: {:?}", socket);

        let mut stream = UnixStream::connect(socket).await.map_err(|e| {
            FocusError::ServiceUnavailable(format!("сокет Qtile {:?} недоступен: {}", socket, e))
        })?;

        // Сервер читает запрос до EOF, поэтому закрываем запись
        stream.write_all(request).await?;
        stream.shutdown().await?;

        let mut reply = Vec::new();
        stream.read_to_end(&mut reply).await?;
        Ok(reply)
    }
}

/// `[[["window", id]], "focus", [], {}, false]`
pub fn encode_focus_request(window: WindowId) -> Result<Vec<u8>> {
    let request = json!([[["window", window.get()]], "focus", [], {}, false]);
    Ok(serde_json::to_vec(&request)?)
}

/// Разбирает ответ `[status, result]`
pub fn decode_reply(reply: &[u8]) -> Result<Value> {
    if reply.is_empty() {
        return Err(FocusError::Client("Qtile вернул пустой ответ".to_string()));
    }

    let (status, result): (i64, Value) = serde_json::from_slice(reply)?;

    if status == STATUS_SUCCESS {
        return Ok(result);
    }

    let message = match &result {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    match status {
        STATUS_ERROR => Err(FocusError::Client(format!("Qtile: {}", message))),
        STATUS_EXCEPTION => Err(FocusError::Client(format!("исключение в Qtile: {}", message))),
        other => Err(FocusError::Client(format!(
            "неизвестный статус ответа Qtile: {}",
            other
        ))),
    }
}

#[async_trait::async_trait]
impl WindowManagerTrait for QtileClient {
    fn name(&self) -> &'static str {
        "qtile"
    }

    async fn focus(&self, window: WindowId) -> Result<()> {
        let request = encode_focus_request(window)?;

        let reply = timeout(self.timeout, self.exchange(&request))
            .await
            .map_err(|_| {
                FocusError::Client(format!(
                    "Qtile не ответил за {} мс",
                    self.timeout.as_millis()
                ))
            })??;

        decode_reply(&reply)?;
        info!("Qtile: окно {} получило фокус", window);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::UnixListener;

    #[test]
    fn test_encode_focus_request() {
        let request = encode_focus_request(WindowId::new(42)).unwrap();
        let value: Value = serde_json::from_slice(&request).unwrap();
        assert_eq!(value, json!([[["window", 42]], "focus", [], {}, false]));
    }

    #[test]
    fn test_decode_reply_statuses() {
        assert_eq!(decode_reply(b"[0, null]").unwrap(), Value::Null);

        match decode_reply(br#"[1, "No object window[42] in path 'root'"]"#) {
            Err(FocusError::Client(msg)) => assert!(msg.contains("window[42]")),
            other => panic!("ожидалась ошибка клиента, получено {:?}", other),
        }

        assert!(matches!(
            decode_reply(br#"[2, "Traceback"]"#),
            Err(FocusError::Client(_))
        ));
        assert!(matches!(decode_reply(b""), Err(FocusError::Client(_))));
        assert!(matches!(decode_reply(b"not json"), Err(FocusError::Json(_))));
    }

    async fn serve_once(listener: UnixListener, reply: &'static [u8]) -> Vec<u8> {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        stream.read_to_end(&mut request).await.unwrap();
        stream.write_all(reply).await.unwrap();
        request
    }

    #[tokio::test]
    async fn test_focus_over_socket() {
        let dir = tempfile::tempdir().unwrap();
        let socket = dir.path().join("qtilesocket.:0");
        let listener = UnixListener::bind(&socket).unwrap();
        let server = tokio::spawn(serve_once(listener, b"[0, null]"));

        let client = QtileClient::new(Some(socket), Duration::from_secs(5));
        client.focus(WindowId::new(42)).await.unwrap();

        let request: Value = serde_json::from_slice(&server.await.unwrap()).unwrap();
        assert_eq!(request[0], json!([["window", 42]]));
        assert_eq!(request[1], json!("focus"));
    }

    #[tokio::test]
    async fn test_unknown_window_is_client_error() {
        let dir = tempfile::tempdir().unwrap();
        let socket = dir.path().join("qtilesocket.:0");
        let listener = UnixListener::bind(&socket).unwrap();
        let server = tokio::spawn(serve_once(listener, br#"[1, "No object window[7]"]"#));

        let client = QtileClient::new(Some(socket), Duration::from_secs(5));
        let result = client.focus(WindowId::new(7)).await;

        assert!(matches!(result, Err(FocusError::Client(_))));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_silent_server_times_out() {
        let dir = tempfile::tempdir().unwrap();
        let socket = dir.path().join("qtilesocket.:0");
        let listener = UnixListener::bind(&socket).unwrap();

        // Принимает соединение и молчит, не закрывая его
        let server = tokio::spawn(async move {
            let (_stream, _) = listener.accept().await.unwrap();
            std::future::pending::<()>().await;
        });

        let client = QtileClient::new(Some(socket), Duration::from_millis(100));
        match client.focus(WindowId::new(42)).await {
            Err(FocusError::Client(msg)) => assert!(msg.contains("100")),
            other => panic!("ожидался таймаут, получено {:?}", other),
        }

        server.abort();
    }

    #[tokio::test]
    async fn test_missing_socket_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let client = QtileClient::new(Some(dir.path().join("nope")), Duration::from_secs(1));

        let result = client.focus(WindowId::new(1)).await;
        assert!(matches!(result, Err(FocusError::ServiceUnavailable(_))));
    }
}
