//! Integration tests for booking-client against a mock HTTP backend.
//!
//! Run with:
//!   cargo test -p booking-client --test integration_tests

use std::time::Duration;

use booking_client::{
    display_message, messages, ApiConfig, AppointmentsResource, AppointmentsState, BookingClient,
    ClientError, User, FETCH_FAILED_MESSAGE,
};
use httpmock::prelude::*;
use serde_json::json;

fn client_for(server: &MockServer) -> BookingClient {
    BookingClient::new(ApiConfig::new(server.base_url())).unwrap()
}

fn sample_appointments() -> serde_json::Value {
    json!([
        {
            "id": 1,
            "date": "2025-03-14",
            "time": "10:00",
            "status": "CONFIRMED",
            "total_amount": 55.0,
            "service_type": "nails",
            "notes": "French tips",
            "service": {"name": "Gel Manicure", "price": 55.0},
            "technician": {"name": "Linh"}
        },
        {
            "id": 2,
            "date": "2025-03-20",
            "time": "15:30",
            "status": "PENDING",
            "totalAmount": 30.0,
            "serviceType": "hair",
            "service": {"name": "Trim", "price": 30.0},
            "technician": {"name": "Ana"}
        }
    ])
}

// ============================================================================
// Client
// ============================================================================

mod client_tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_appointments() {
        let server = MockServer::start_async().await;
        let m = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/appointments/customer/u-42");
                then.status(200).json_body(sample_appointments());
            })
            .await;

        let appointments = client_for(&server).fetch_appointments("u-42").await.unwrap();

        m.assert_async().await;
        assert_eq!(appointments.len(), 2);
        assert_eq!(appointments[0].notes.as_deref(), Some("French tips"));
        assert_eq!(appointments[1].service_type, "hair");
        assert_eq!(appointments[1].technician.name, "Ana");
    }

    #[tokio::test]
    async fn test_empty_body_is_empty_list() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/appointments/customer/u-1");
                then.status(200).body("");
            })
            .await;

        let appointments = client_for(&server).fetch_appointments("u-1").await.unwrap();
        assert!(appointments.is_empty());
    }

    #[tokio::test]
    async fn test_null_body_is_empty_list() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/services");
                then.status(200).body("null");
            })
            .await;

        let services = client_for(&server).fetch_services().await.unwrap();
        assert!(services.is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/technicians");
                then.status(503).body("maintenance");
            })
            .await;

        let err = client_for(&server).fetch_technicians().await.unwrap_err();
        assert!(matches!(err, ClientError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_catalog() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/services");
                then.status(200).json_body(json!([
                    {"id": 1, "name": "Pedicure", "price": 35.0, "duration": 45},
                    {"id": 2, "name": "Facial", "price": 60.0, "description": "Deep clean"}
                ]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/technicians");
                then.status(200)
                    .json_body(json!([{"id": 3, "name": "Mai", "specialty": "nails"}]));
            })
            .await;

        let client = client_for(&server);
        let services = client.fetch_services().await.unwrap();
        let technicians = client.fetch_technicians().await.unwrap();

        assert_eq!(services[0].duration, Some(45));
        assert_eq!(services[1].description.as_deref(), Some("Deep clean"));
        assert_eq!(technicians[0].specialty.as_deref(), Some("nails"));
    }

    #[tokio::test]
    async fn test_health_check() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/health");
                then.status(200).body("UP");
            })
            .await;

        let client = BookingClient::connect(ApiConfig::new(server.base_url()))
            .await
            .unwrap();
        assert!(client.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_connect_fails_on_unhealthy_backend() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/health");
                then.status(500);
            })
            .await;

        let err = BookingClient::connect(ApiConfig::new(server.base_url()))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::HealthCheckFailed));
    }

    #[tokio::test]
    async fn test_request_timeout() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/services");
                then.status(200).delay(Duration::from_millis(500)).body("[]");
            })
            .await;

        let mut config = ApiConfig::new(server.base_url());
        config.request_timeout = Duration::from_millis(50);
        let client = BookingClient::new(config).unwrap();

        let err = client.fetch_services().await.unwrap_err();
        assert!(matches!(err, ClientError::Timeout));
        assert_eq!(display_message(&err), messages::TIMEOUT_MESSAGE);
    }

    #[tokio::test]
    async fn test_unreachable_backend_message() {
        let client = BookingClient::new(ApiConfig::new("http://127.0.0.1:1")).unwrap();

        let err = client.fetch_appointments("u-1").await.unwrap_err();
        assert_eq!(display_message(&err), messages::CANNOT_CONNECT_MESSAGE);
    }
}

// ============================================================================
// Appointments resource
// ============================================================================

mod resource_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_500_yields_empty_list_and_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/appointments/customer/u-500");
                then.status(500).body("Internal Server Error");
            })
            .await;

        let resource = AppointmentsResource::new(client_for(&server));
        resource.mount(Some(&User::new("u-500"))).await;

        assert_eq!(
            resource.snapshot(),
            AppointmentsState {
                appointments: vec![],
                is_loading: false,
                error: Some(FETCH_FAILED_MESSAGE.to_string()),
            }
        );
    }

    #[tokio::test]
    async fn test_no_user_makes_no_request() {
        let server = MockServer::start_async().await;
        let m = server
            .mock_async(|when, then| {
                when.method(GET);
                then.status(200).json_body(sample_appointments());
            })
            .await;

        let resource = AppointmentsResource::new(client_for(&server));
        resource.mount(None).await;

        assert_eq!(m.hits_async().await, 0);
        assert_eq!(
            resource.snapshot(),
            AppointmentsState {
                appointments: vec![],
                is_loading: false,
                error: None,
            }
        );
    }

    #[tokio::test]
    async fn test_refetch_picks_up_new_data() {
        let server = MockServer::start_async().await;
        let mut first = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/appointments/customer/u-7");
                then.status(200).json_body(json!([]));
            })
            .await;

        let resource = AppointmentsResource::new(client_for(&server));
        resource.mount(Some(&User::new("u-7"))).await;
        assert!(resource.snapshot().appointments.is_empty());

        first.delete_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/appointments/customer/u-7");
                then.status(200).json_body(sample_appointments());
            })
            .await;

        resource.refetch().await;
        assert_eq!(resource.snapshot().appointments.len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_json_yields_empty_list_and_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/appointments/customer/u-bad");
                then.status(200).json_body(json!({"not": "an array"}));
            })
            .await;

        let resource = AppointmentsResource::new(client_for(&server));
        resource.mount(Some(&User::new("u-bad"))).await;

        assert_eq!(
            resource.snapshot(),
            AppointmentsState {
                appointments: vec![],
                is_loading: false,
                error: Some(FETCH_FAILED_MESSAGE.to_string()),
            }
        );
    }

    #[tokio::test]
    async fn test_unreachable_backend_yields_empty_list_and_message() {
        let client = BookingClient::new(ApiConfig::new("http://127.0.0.1:1")).unwrap();
        let resource = AppointmentsResource::new(client);
        resource.mount(Some(&User::new("u-1"))).await;

        assert_eq!(
            resource.snapshot(),
            AppointmentsState {
                appointments: vec![],
                is_loading: false,
                error: Some(FETCH_FAILED_MESSAGE.to_string()),
            }
        );
    }
}
