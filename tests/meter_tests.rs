use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::{mount_json, setup_test_client};
use powersocket_client::{EnergyReading, PowerReading, SocketError, StatsPeriod};

#[tokio::test]
async fn test_power_reading() -> Result<(), SocketError> {
    // What it tests: `/power` deserializes the four core readings exactly, and the firmware's
    // extra fields (apparent power, frequency, ...) plus the unrelated `stats` block are tolerated.
    //
    // Why it's valuable: The stats button shows `data.voltage`; a firmware update adding fields
    // must not make that call fail.
    let mock_server = MockServer::start().await;
    mount_json(
        &mock_server,
        "/power",
        json!({
            "status": "success",
            "data": {
                "voltage": 229.5,
                "current": 0.25,
                "power": 57.375,
                "apparent_power": 60.0,
                "reactive_power": 17.5,
                "power_factor": 0.5,
                "frequency": 50.0,
                "energy": 1.5,
                "timestamp": 1718000000,
                "temperature": 48.5
            },
            "stats": { "voltage_avg": 230.0 }
        }),
    )
    .await;

    let client = setup_test_client(&mock_server.uri());
    let response = client.meter().power().await?;

    assert_eq!(response.status, "success");
    assert_eq!(
        response.data,
        Some(PowerReading {
            voltage: 229.5,
            current: 0.25,
            power: 57.375,
            energy: 1.5,
            apparent_power: Some(60.0),
            reactive_power: Some(17.5),
            power_factor: Some(0.5),
            frequency: Some(50.0),
            temperature: Some(48.5),
            timestamp: Some(1718000000),
        })
    );

    Ok(())
}

#[tokio::test]
async fn test_power_minimal_body() -> Result<(), SocketError> {
    // What it tests: A body with only voltage/current/power/energy deserializes with the
    // optional readings left empty.
    //
    // Why it's valuable: Older firmware sends only the four core fields.
    let mock_server = MockServer::start().await;
    mount_json(
        &mock_server,
        "/power",
        json!({
            "status": "success",
            "data": { "voltage": 231.0, "current": 1.0, "power": 231.0, "energy": 0.0 }
        }),
    )
    .await;

    let client = setup_test_client(&mock_server.uri());
    let reading = client.meter().power().await?.data.expect("power data");

    assert_eq!(reading.voltage, 231.0);
    assert_eq!(reading.frequency, None);
    assert_eq!(reading.timestamp, None);

    Ok(())
}

#[tokio::test]
async fn test_energy_reading() -> Result<(), SocketError> {
    // What it tests: `/energy` yields the latest record with energy, timestamp and cost.
    //
    // Why it's valuable: Confirms the i64 timestamp and optional cost map correctly and that
    // the surrounding `stats`/`environment` blocks are ignored.
    let mock_server = MockServer::start().await;
    mount_json(
        &mock_server,
        "/energy",
        json!({
            "status": "success",
            "data": { "energy": 0.125, "cost": 0.625, "timestamp": 1718000000 },
            "stats": { "today": { "energy_total": 2.0 } },
            "environment": { "co2_kg": 0.66 }
        }),
    )
    .await;

    let client = setup_test_client(&mock_server.uri());
    let response = client.meter().energy().await?;

    assert_eq!(
        response.data,
        Some(EnergyReading {
            energy: 0.125,
            timestamp: 1718000000,
            cost: Some(0.625),
            ..Default::default()
        })
    );
    assert_eq!(
        response.data.unwrap().recorded_at().map(|t| t.timestamp()),
        Some(1718000000)
    );

    Ok(())
}

#[tokio::test]
async fn test_energy_without_history() -> Result<(), SocketError> {
    // What it tests: A missing `data` object yields `data: None` rather than an error.
    //
    // Why it's valuable: A fresh device has no history; that is a normal answer, not a failure.
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, "/energy", json!({ "status": "success" })).await;

    let client = setup_test_client(&mock_server.uri());
    let response = client.meter().energy().await?;

    assert_eq!(response.data, None);

    Ok(())
}

#[tokio::test]
async fn test_stats_requests_period_path() -> Result<(), SocketError> {
    // What it tests: `stats("day")` requests exactly `/stats/day`, and StatsPeriod values map to
    // their lowercase path segment.
    //
    // Why it's valuable: The period is the only caller-controlled part of any URL in the API.
    let mock_server = MockServer::start().await;
    mount_json(
        &mock_server,
        "/stats/day",
        json!({ "status": "success", "period": "day", "data": { "energy_total": 3.5 } }),
    )
    .await;
    mount_json(
        &mock_server,
        "/stats/week",
        json!({ "status": "success", "data": null }),
    )
    .await;

    let client = setup_test_client(&mock_server.uri());

    let day = client.meter().stats("day").await?;
    assert_eq!(day.data.and_then(|d| d.energy_total), Some(3.5));

    let week = client.meter().stats(StatsPeriod::Week).await?;
    assert_eq!(week.data, None);

    let requests = mock_server
        .received_requests()
        .await
        .expect("failed to read recorded requests");
    let paths: Vec<_> = requests.iter().map(|r| r.url.path().to_string()).collect();
    assert_eq!(paths, vec!["/stats/day", "/stats/week"]);

    Ok(())
}

#[tokio::test]
async fn test_stats_invalid_period_is_not_an_error() -> Result<(), SocketError> {
    // What it tests: The firmware answers unknown periods with 200 and an error envelope; the
    // binding returns it as a value with no data and the device's message.
    //
    // Why it's valuable: Only transport, HTTP status and parse failures are errors; the envelope
    // status is the caller's to interpret.
    let mock_server = MockServer::start().await;
    mount_json(
        &mock_server,
        "/stats/decade",
        json!({
            "status": "error",
            "period": "decade",
            "message": "Invalid period. Use: today, yesterday, week, month"
        }),
    )
    .await;

    let client = setup_test_client(&mock_server.uri());
    let response = client.meter().stats("decade").await?;

    assert_eq!(response.status, "error");
    assert_eq!(response.data, None);
    assert!(response.message.unwrap().starts_with("Invalid period"));

    Ok(())
}

#[tokio::test]
async fn test_blank_period_rejected_before_request() {
    // What it tests: An empty, whitespace, `.` or `..` period fails with InvalidEndpoint and
    // sends nothing.
    //
    // Why it's valuable: Each of these would reach a different firmware route than
    // `/stats/{period}`.
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    for period in ["", "  "] {
        match client.meter().stats(period).await {
            Err(SocketError::InvalidEndpoint(msg)) => assert!(msg.contains("period")),
            other => panic!("expected InvalidEndpoint for {period:?}, got {other:?}"),
        }
    }

    // Dot segments would be resolved away and hit `/stats` or `/` instead.
    Mock::given(method("GET"))
        .and(path("/stats"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;
    for period in [".", ".."] {
        match client.meter().stats(period).await {
            Err(SocketError::InvalidEndpoint(msg)) => assert!(msg.contains("dot segment")),
            other => panic!("expected InvalidEndpoint for {period:?}, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_stats_firmware_aggregates() -> Result<(), SocketError> {
    // What it tests: The aggregate body the firmware sends for `/stats/today` (totals, peak and
    // off-peak split, cost, usage hours, average power; no `energy` or `timestamp`) parses, with
    // the missing record fields reading as zero.
    //
    // Why it's valuable: This is the only shape the device produces for stats; any other fixture
    // would leave the real call untested.
    let mock_server = MockServer::start().await;
    mount_json(
        &mock_server,
        "/stats/today",
        json!({
            "status": "success",
            "period": "today",
            "data": {
                "avg_power": 750.0,
                "cost_total": 6.5,
                "energy_offpeak": 0.25,
                "energy_peak": 1.25,
                "energy_total": 1.5,
                "usage_hours": 2.0
            }
        }),
    )
    .await;

    let client = setup_test_client(&mock_server.uri());
    let response = client.meter().stats(StatsPeriod::Today).await?;

    assert_eq!(response.period.as_deref(), Some("today"));
    assert_eq!(
        response.data,
        Some(EnergyReading {
            energy_total: Some(1.5),
            energy_peak: Some(1.25),
            energy_offpeak: Some(0.25),
            cost_total: Some(6.5),
            usage_hours: Some(2.0),
            avg_power: Some(750.0),
            ..Default::default()
        })
    );
    assert_eq!(response.data.unwrap().recorded_at(), None);

    Ok(())
}
