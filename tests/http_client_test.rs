use std::sync::Arc;

use frontend::api::{ApiClient, ExportLink, HttpApiClient, RequestOptions};
use frontend::error::AppError;
use frontend::notice::{Notice, NoticeBoard};
use frontend::storage::{MemoryStorage, Storage};
use reqwest::Method;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer, storage: MemoryStorage) -> (HttpApiClient, Arc<NoticeBoard>) {
    let notices = Arc::new(NoticeBoard::default());
    let storage: Arc<dyn Storage> = Arc::new(storage);
    let client = HttpApiClient::new(&server.uri(), storage, notices.clone())
        .expect("Failed to build client");
    (client, notices)
}

#[tokio::test]
async fn sends_no_authorization_without_a_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/registro/all"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [], "total": 0})))
        .mount(&server)
        .await;
    let (client, _) = client(&server, MemoryStorage::default());

    let body = client
        .request("/registro/all?page=1&size=50", RequestOptions::default())
        .await
        .unwrap();

    assert_eq!(body["total"], 0);
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
    assert_eq!(requests[0].headers.get("content-type").unwrap(), "application/json");
    assert_eq!(requests[0].headers.get("accept").unwrap(), "application/json");
}

#[tokio::test]
async fn attaches_the_stored_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/registro/total-estudiantes"))
        .and(header("authorization", "Bearer s3cret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total_estudiantes": 3})))
        .mount(&server)
        .await;
    let (client, _) = client(&server, MemoryStorage::with_token("s3cret"));

    let body = client
        .request("/registro/total-estudiantes", RequestOptions::default())
        .await
        .unwrap();

    assert_eq!(body["total_estudiantes"], 3);
}

#[tokio::test]
async fn unauthorized_raises_a_notice() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    let (client, notices) = client(&server, MemoryStorage::default());

    let err = client
        .request("/registro/", RequestOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Unauthorized));
    assert_eq!(notices.drain(), vec![Notice::NotAuthorized]);
}

#[tokio::test]
async fn forbidden_raises_the_invalid_token_notice() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    let (client, notices) = client(&server, MemoryStorage::with_token("expired"));

    let err = client
        .request("/registro/", RequestOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Forbidden));
    assert_eq!(notices.drain(), vec![Notice::InvalidToken]);
}

#[tokio::test]
async fn error_bodies_become_messages() {
    let server = MockServer::start().await;
    Mock::given(path("/registro/buscar-estudiantes"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"detail": "Debe enviar al menos un criterio de búsqueda"})),
        )
        .mount(&server)
        .await;
    Mock::given(path("/registro/excel"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;
    let (client, notices) = client(&server, MemoryStorage::default());

    let err = client
        .request("/registro/buscar-estudiantes?", RequestOptions::default())
        .await
        .unwrap_err();
    match err {
        AppError::Http { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Debe enviar al menos un criterio de búsqueda");
        }
        other => panic!("unexpected error: {:?}", other),
    }

    let err = client
        .request("/registro/excel", RequestOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Ocurrió un error en la petición.");
    assert!(notices.drain().is_empty());
}

#[tokio::test]
async fn no_content_resolves_to_an_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    let (client, _) = client(&server, MemoryStorage::default());

    let body = client
        .request("/registro/7", RequestOptions::default().method(Method::DELETE))
        .await
        .unwrap();

    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn multipart_bodies_keep_the_transport_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;
    let (client, _) = client(&server, MemoryStorage::default());

    let form = reqwest::multipart::Form::new().text("archivo", "contenido");
    client
        .request(
            "/registro/carga",
            RequestOptions::default().method(Method::POST).multipart(form),
        )
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0].headers.get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("multipart/form-data; boundary="));
}

#[tokio::test]
async fn downloads_carry_auth_and_the_server_filename() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/registro/excel"))
        .and(header("authorization", "Bearer s3cret"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(
                    "content-disposition",
                    "attachment; filename=registros_A123_inicio_a_fin.xlsx",
                )
                .set_body_bytes(b"PK\x03\x04".to_vec()),
        )
        .mount(&server)
        .await;
    let (client, _) = client(&server, MemoryStorage::with_token("s3cret"));

    let download = client
        .download(&ExportLink {
            href: "/registro/excel?codigo_estudiante=A123".to_string(),
            filename: "reporte_filtrado.xlsx".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(download.filename, "registros_A123_inicio_a_fin.xlsx");
    assert_eq!(download.bytes, b"PK\x03\x04".to_vec());
}
