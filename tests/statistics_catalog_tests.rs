use bar_chart_rs::ChartError;
use bar_chart_rs::core::{Bin, DataPoint};
use bar_chart_rs::render::{ContainerRef, SvgDocument};
use bar_chart_rs::statistics::{
    ChartCatalog, QueryScope, StatisticsQuery, StatisticsSeries, decode_statistics_response,
};
use chrono::NaiveDate;

fn april_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2013, 4, 1).expect("valid date")
}

#[test]
fn day_scope_builds_full_query_payload() {
    let payload = QueryScope::day(april_first())
        .query()
        .to_payload()
        .expect("payload");
    assert_eq!(payload, r#"{"day":1,"month":4,"year":2013}"#);
}

#[test]
fn wider_scopes_omit_unset_fields() {
    let month = QueryScope::month_of(april_first()).query();
    assert_eq!(
        month.to_payload().expect("payload"),
        r#"{"month":4,"year":2013}"#
    );
    let year = QueryScope::year_of(april_first()).query();
    assert_eq!(year.to_payload().expect("payload"), r#"{"year":2013}"#);
    assert_eq!(
        QueryScope::All.query().to_payload().expect("payload"),
        "{}"
    );
    assert_eq!(QueryScope::All.query(), StatisticsQuery::default());
}

#[test]
fn expected_bins_follow_scope() {
    let hours = QueryScope::day(april_first()).expected_bins().expect("hours");
    assert_eq!(hours.len(), 24);
    assert_eq!(hours[0], Bin::Index(0));

    let days = QueryScope::month_of(april_first())
        .expected_bins()
        .expect("days");
    assert_eq!(days.len(), 30);
    assert_eq!(days.last(), Some(&Bin::Index(30)));

    let leap_february = QueryScope::Month {
        year: 2012,
        month: 2,
    }
    .expected_bins()
    .expect("february");
    assert_eq!(leap_february.len(), 29);

    let months = QueryScope::year_of(april_first())
        .expected_bins()
        .expect("months");
    assert_eq!(months.len(), 12);
    assert_eq!(months[0], Bin::from("Jan"));
    assert_eq!(months[11], Bin::from("Dec"));

    assert!(
        QueryScope::Month {
            year: 2013,
            month: 13
        }
        .expected_bins()
        .is_err()
    );
}

#[test]
fn default_catalog_holds_both_daily_charts_in_order() {
    let catalog = ChartCatalog::statistics_today(april_first());

    let ids: Vec<&str> = catalog.ids().collect();
    assert_eq!(ids, vec!["data_today", "number_files_today"]);

    let data = catalog.get("data_today").expect("data chart");
    assert_eq!(data.container, ContainerRef::new("#plot_data_today"));
    assert_eq!(data.endpoint, "/rest/statistics/data_per_day");
    assert_eq!(data.title, "Transferred data");
    assert_eq!(data.y_label, "Data [kB]");
    assert_eq!(
        data.query_payload().expect("payload"),
        r#"{"day":1,"month":4,"year":2013}"#
    );

    let files = catalog.get("number_files_today").expect("files chart");
    assert_eq!(files.series, StatisticsSeries::Files);
    assert_eq!(files.config().viewport.width, 800);
    assert_eq!(files.config().viewport.height, 300);
    assert_eq!(files.config().x_label, "Time");
}

#[test]
fn unknown_chart_id_is_reported() {
    let catalog = ChartCatalog::statistics_today(april_first());
    let err = catalog.get("missing").expect_err("unknown id");
    assert!(matches!(err, ChartError::UnknownChart(id) if id == "missing"));
}

#[test]
fn catalog_json_roundtrip() {
    let catalog = ChartCatalog::statistics_today(april_first());
    let json = catalog.to_json_pretty().expect("serialize");
    assert!(json.contains(r#""scope": "day""#));

    let restored = ChartCatalog::from_json_str(&json).expect("deserialize");
    assert_eq!(restored, catalog);
}

#[test]
fn catalog_loads_hand_written_json() {
    let json = r##"{
        "charts": {
            "files_month": {
                "container": "#plot_files_month",
                "endpoint": "/rest/statistics/number_files_per_month",
                "width": 640,
                "height": 240,
                "title": "Files this month",
                "x_label": "Day",
                "y_label": "Number",
                "series": "files",
                "scope": { "scope": "month", "year": 2013, "month": 4 }
            }
        }
    }"##;
    let catalog = ChartCatalog::from_json_str(json).expect("catalog");

    let chart = catalog.get("files_month").expect("chart");
    assert_eq!(chart.container.element_id(), Some("plot_files_month"));
    assert_eq!(
        chart.query_payload().expect("payload"),
        r#"{"month":4,"year":2013}"#
    );
}

#[test]
fn decode_accepts_bare_series() {
    let json = r#"[{"bin": 0, "value": 1.5}, {"bin": 1, "value": 3}]"#;
    let points = decode_statistics_response(json, StatisticsSeries::Data).expect("decode");
    assert_eq!(
        points,
        vec![DataPoint::new(0, 1.5), DataPoint::new(1, 3.0)]
    );
}

#[test]
fn decode_selects_series_from_envelope() {
    let json = r#"{
        "status": "success",
        "hist_data": [{"bin": "Jan", "value": 10.5}, {"bin": "Feb", "value": 2}],
        "hist_file": [{"bin": "Jan", "value": 4}, {"bin": "Feb", "value": 9}]
    }"#;

    let data = decode_statistics_response(json, StatisticsSeries::Data).expect("data");
    assert_eq!(data[0], DataPoint::new("Jan", 10.5));

    let files = decode_statistics_response(json, StatisticsSeries::Files).expect("files");
    assert_eq!(files[1], DataPoint::new("Feb", 9.0));
}

#[test]
fn decode_rejects_failed_status_and_garbage() {
    let failed = r#"{"status": "error", "hist_data": [], "hist_file": []}"#;
    assert!(matches!(
        decode_statistics_response(failed, StatisticsSeries::Data),
        Err(ChartError::InvalidData(_))
    ));
    assert!(decode_statistics_response("not json", StatisticsSeries::Data).is_err());
}

#[test]
fn catalog_renders_into_its_container() {
    let catalog = ChartCatalog::statistics_today(april_first());
    let definition = catalog.get("data_today").expect("chart");
    let mut document = SvgDocument::new().with_container(definition.container.clone());

    let data: Vec<DataPoint> = (0..24).map(|hour| DataPoint::new(hour, hour as f64)).collect();
    let layout = catalog
        .render(&mut document, "data_today", &data)
        .expect("render");

    assert_eq!(layout.bars.len(), 24);
    let markup = document.markup(&definition.container).expect("markup");
    assert!(markup.contains("Transferred data"));
    assert!(markup.contains("Data [kB]"));
}
