use std::sync::Arc;
use std::time::Duration;

use birdguide::testing::MockFetcher;
use birdguide::ProfileScraper;
use ebird_client::EbirdClient;
use flamingo_core::observations::{ELLIPSIS, MESSAGE_LIMIT};
use flamingo_core::render::{NOT_FOUND_DESCRIPTION, NOT_FOUND_TITLE};
use flamingo_core::{Config, Flamingo, FlamingoError};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GUIDE: &str = "https://www.allaboutbirds.org/guide";

fn bot(server: &MockServer, fetcher: MockFetcher) -> Flamingo {
    let config = Config::new("test-key").with_ebird_base_url(server.uri());
    let ebird = EbirdClient::new(config.ebird_key.clone()).with_base_url(server.uri());
    let guide = ProfileScraper::with_fetcher(Arc::new(fetcher));
    Flamingo::with_clients(config, ebird, guide)
}

async fn mount_json(server: &MockServer, feed: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(feed))
        .and(header("X-eBirdApiToken", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.to_string()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_recent_lists_species_alphabetically() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/data/obs/geo/recent",
        r#"[{"ComName":"Blue Jay","HowMany":3},{"ComName":"American Robin","HowMany":5}]"#,
    )
    .await;

    let message = bot(&server, MockFetcher::new()).recent("rit", false).await.unwrap();

    assert_eq!(
        message,
        "**Verified eBird sightings within 5 km of Rochester Institute of Technology in the past 2 weeks:**\n\
         American Robin: 5\n\
         Blue Jay: 3\n"
    );
}

#[tokio::test]
async fn test_recent_reversed() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/data/obs/geo/recent",
        r#"[{"comName":"American Robin","howMany":5},{"comName":"Blue Jay","howMany":3}]"#,
    )
    .await;

    let message = bot(&server, MockFetcher::new()).recent("RIT", true).await.unwrap();
    let robin = message.find("American Robin").unwrap();
    let jay = message.find("Blue Jay").unwrap();
    assert!(jay < robin);
}

#[tokio::test]
async fn test_notable_merges_same_place_and_day() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/obs/geo/recent/notable"))
        .and(query_param("dist", "15"))
        .and(query_param("hotspot", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"[
                {"comName":"Snowy Owl","howMany":1,"locName":"Braddock Bay Park","obsDt":"2024-01-15 08:30"},
                {"comName":"Snowy Owl","howMany":2,"locName":"Braddock Bay Park","obsDt":"2024-01-15 14:10"}
            ]"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let message = bot(&server, MockFetcher::new())
        .notable("braddock", false)
        .await
        .unwrap();

    assert_eq!(
        message,
        "**Notable eBird sightings within 15 km of Braddock Bay Park in the past 2 weeks:**\n\
         Snowy Owl: 3 [Braddock Bay Park: 2024-01-15]\n"
    );
}

#[tokio::test]
async fn test_notable_empty_feed() {
    let server = MockServer::start().await;
    mount_json(&server, "/data/obs/geo/recent/notable", "[]").await;

    let message = bot(&server, MockFetcher::new())
        .notable("mendon", false)
        .await
        .unwrap();

    assert_eq!(message, "**No notable eBird sightings found.**");
}

#[tokio::test]
async fn test_long_feed_is_truncated_on_a_line_boundary() {
    let server = MockServer::start().await;
    let body = serde_json::to_string(
        &(0..300)
            .map(|i| serde_json::json!({"comName": format!("Species {i:04}"), "howMany": i + 1}))
            .collect::<Vec<_>>(),
    )
    .unwrap();
    mount_json(&server, "/data/obs/geo/recent", &body).await;

    let message = bot(&server, MockFetcher::new()).recent("rit", false).await.unwrap();

    assert!(message.len() <= MESSAGE_LIMIT);
    assert!(message.ends_with(ELLIPSIS));
    let body_lines = message.trim_end_matches(ELLIPSIS).lines().skip(1);
    for line in body_lines {
        assert!(line.starts_with("Species "), "partial line: {line:?}");
        assert!(line.rsplit(": ").next().unwrap().parse::<i64>().is_ok());
    }
}

#[tokio::test]
async fn test_unknown_location() {
    let server = MockServer::start().await;
    let err = bot(&server, MockFetcher::new())
        .recent("paris", false)
        .await
        .unwrap_err();

    assert!(matches!(err, FlamingoError::UnknownLocation(_)));
    assert_eq!(
        Flamingo::reply(Err(err)),
        "Error: 'paris' is not a valid location"
    );
}

#[tokio::test]
async fn test_malformed_feed_is_decode_error() {
    let server = MockServer::start().await;
    mount_json(&server, "/data/obs/geo/recent", "not json").await;

    let err = bot(&server, MockFetcher::new())
        .recent("rit", false)
        .await
        .unwrap_err();
    assert!(matches!(err, FlamingoError::Decode(_)));
}

#[tokio::test]
async fn test_slow_feed_times_out_as_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("[]")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = Config::new("test-key").with_request_timeout(Duration::from_millis(100));
    let ebird = EbirdClient::new("test-key".into()).with_base_url(server.uri());
    let guide = ProfileScraper::with_fetcher(Arc::new(MockFetcher::new()));
    let bot = Flamingo::with_clients(config, ebird, guide);

    let err = bot.recent("rit", false).await.unwrap_err();
    assert!(matches!(err, FlamingoError::Transport(_)));
}

#[tokio::test]
async fn test_nonexistent_species_renders_guidance() {
    let server = MockServer::start().await;
    let fetcher = MockFetcher::new().with_page(
        format!("{GUIDE}/Purple_Penguin"),
        r#"<html><body><h1 class="page-title">Search Results</h1></body></html>"#,
    );
    let bot = bot(&server, fetcher);

    let err = bot.profile("purple penguin").await.unwrap_err();
    assert!(matches!(err, FlamingoError::NotFound { .. }));

    let embed = bot.bird("purple penguin").await;
    assert_eq!(embed.title, NOT_FOUND_TITLE);
    assert_eq!(embed.description.as_deref(), Some(NOT_FOUND_DESCRIPTION));
}

#[tokio::test]
async fn test_fetch_failure_renders_guidance() {
    let server = MockServer::start().await;
    let embed = bot(&server, MockFetcher::new()).bird("blue jay").await;
    assert_eq!(embed.title, NOT_FOUND_TITLE);
}

#[tokio::test]
async fn test_found_species_without_facts_still_renders() {
    let server = MockServer::start().await;
    let fetcher = MockFetcher::new().with_page(
        format!("{GUIDE}/Blue_Jay"),
        r#"<html><body>
            <div class="callout" aria-label="Species Info">
              <span class="species-name">Blue Jay</span>
              <em>Cyanocitta cristata</em>
              <ul><li>ORDER: Passeriformes</li><li>FAMILY: Corvidae</li></ul>
            </div>
        </body></html>"#,
    );

    let embed = bot(&server, fetcher).bird("blue jay").await;

    assert_eq!(embed.title, "Blue Jay");
    assert_eq!(embed.description.as_deref(), Some("Cyanocitta cristata"));
    assert_eq!(embed.field("Family"), Some("Corvidae"));
    assert_eq!(embed.field("Cool Fact"), Some("No fact available."));
    assert_eq!(embed.url.as_deref(), Some("https://www.allaboutbirds.org/guide/Blue_Jay"));
}

#[test]
fn test_help_lists_configured_locations() {
    let config = Config::new("key");
    let ebird = EbirdClient::new("key".into());
    let guide = ProfileScraper::with_fetcher(Arc::new(MockFetcher::new()));
    let bot = Flamingo::with_clients(config, ebird, guide);

    let help = bot.help();
    let names: Vec<&str> = help.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "help",
            "recent <rit|braddock|mendon> [--reversed]",
            "notable <rit|braddock|mendon> [--reversed]",
            "bird <full bird name>",
        ]
    );
}

#[tokio::test]
async fn test_new_shares_one_http_client_across_services() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/obs/geo/recent"))
        .and(header("X-eBirdApiToken", "test-key"))
        .and(header("user-agent", "FlaminGo/0.1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"[{"comName":"Blue Jay","howMany":2}]"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/guide/Blue_Jay"))
        .and(header("user-agent", "FlaminGo/0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body><h1 class="page-title">Search Results</h1></body></html>"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config::new("test-key")
        .with_ebird_base_url(server.uri())
        .with_guide_base_url(format!("{}/guide", server.uri()));
    let bot = Flamingo::new(config).unwrap();

    let message = bot.recent("rit", false).await.unwrap();
    assert!(message.ends_with("Blue Jay: 2\n"));

    let embed = bot.bird("blue jay").await;
    assert_eq!(embed.title, NOT_FOUND_TITLE);
}
