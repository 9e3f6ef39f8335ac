use std::io::Write;

use roamer::catalog::{load_catalog, FileCatalog};
use roamer::config::RoamerConfig;
use roamer::format::format_count;
use roamer::types::{FilterCriteria, KindFilter};
use roamer::Roamer;

const CATALOG: &str = r#"[
  {"id": "alps", "type": "video", "title": "Alps Trek", "tags": ["hiking", "mountains"],
   "location": "Swiss Alps, Switzerland", "viewCount": "not-a-number", "duration": 3725},
  {"id": "kandy", "type": "short", "title": "Kandy Shorts", "tags": ["temple", "culture"],
   "location": "Kandy, Sri Lanka", "viewCount": "1500"},
  {"id": "lisbon", "type": "short", "title": "Tram 28", "location": "Lisbon, Portugal"}
]"#;

fn write_catalog(text: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(text.as_bytes()).unwrap();
    f
}

#[tokio::test]
async fn file_catalog_round_trip_through_roamer() {
    let file = write_catalog(CATALOG);
    let config = RoamerConfig { catalog_path: Some(file.path().to_path_buf()), ..Default::default() };
    let roamer = Roamer::open(config).await.unwrap();

    assert_eq!(roamer.catalog().len(), 3);

    let alps = &roamer.catalog()[0];
    assert_eq!(alps.view_count, 0);
    assert_eq!(format_count(alps.view_count), "0");

    let hits = roamer.filter(&FilterCriteria::default().with_search("alps"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "alps");

    let shorts = roamer.filter(&FilterCriteria::default().with_kind(KindFilter::ShortForm));
    assert_eq!(shorts.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(), vec!["kandy", "lisbon"]);

    let tagged = roamer.filter(&FilterCriteria::default().with_tags(["hiking"]));
    assert_eq!(tagged.len(), 1);

    assert_eq!(roamer.countries(), vec!["Switzerland", "Sri Lanka"]);

    let stats = roamer.stats();
    assert_eq!(stats.total_items, 3);
    assert_eq!(stats.long_form, 1);
    assert_eq!(stats.short_form, 2);
    assert_eq!(stats.countries, 2);
    assert_eq!(stats.distinct_tags, 4);
    assert_eq!(stats.total_views, 1500);
}

#[tokio::test]
async fn extra_countries_extend_the_facet() {
    let file = write_catalog(CATALOG);
    let config = RoamerConfig {
        catalog_path: Some(file.path().to_path_buf()),
        extra_countries: vec!["Portugal".to_string()],
        ..Default::default()
    };
    let roamer = Roamer::open(config).await.unwrap();
    assert_eq!(roamer.countries(), vec!["Switzerland", "Sri Lanka", "Portugal"]);
    let hits = roamer.filter(&FilterCriteria::default().with_country("Portugal"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "lisbon");
}

#[tokio::test]
async fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");
    let err = load_catalog(&FileCatalog::new(&path)).await.unwrap_err();
    assert!(format!("{:#}", err).contains("nope.json"));
}

#[tokio::test]
async fn non_sequence_tags_fail_loading() {
    let file = write_catalog(r#"[{"id": "x", "type": "video", "title": "t", "tags": "hiking"}]"#);
    assert!(load_catalog(&FileCatalog::new(file.path())).await.is_err());
}

#[tokio::test]
async fn bundled_catalog_has_facets() {
    let roamer = Roamer::open(RoamerConfig::default()).await.unwrap();
    let countries = roamer.countries();
    assert_eq!(countries.first().map(String::as_str), Some("Sri Lanka"));
    assert!(countries.contains(&"Switzerland".to_string()));
    let tags = roamer.popular_tags();
    assert!(tags.len() <= roamer.config().popular_tag_limit);
    assert_eq!(tags.first().map(String::as_str), Some("hiking"));
}

#[tokio::test]
async fn all_pass_criteria_return_the_whole_catalog_in_order() {
    let file = write_catalog(CATALOG);
    let config = RoamerConfig { catalog_path: Some(file.path().to_path_buf()), ..Default::default() };
    let roamer = Roamer::open(config).await.unwrap();

    let criteria = FilterCriteria::default().with_country("all").with_search("  ");
    assert!(criteria.is_all_pass());
    let all = roamer.filter(&criteria);
    assert_eq!(all.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(), vec!["alps", "kandy", "lisbon"]);
    assert!(all.iter().zip(roamer.catalog()).all(|(a, b)| std::ptr::eq(*a, b)));
}
