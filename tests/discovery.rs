//! End-to-end behavior against the bundled catalog.

use tourfinder::api::{dispatch, ApiRequest};
use tourfinder::app::{BookingField, PageParams};
use tourfinder::catalog::{featured, query, CatalogSource, JsonCatalog};
use tourfinder::domain::{Difficulty, SearchFilters, SortKey, Tour};
use tourfinder::locale::{country_name_for, currency_for, format_price, resolve, FixedTimezone, GeoCurrency};
use tourfinder::{handle_event, Action, AppState, Event};

fn catalog() -> JsonCatalog {
    JsonCatalog::embedded().unwrap()
}

fn ids(tours: &[&Tour]) -> Vec<u32> {
    tours.iter().map(|t| t.id).collect()
}

#[test]
fn empty_filters_return_whole_catalog() {
    let catalog = catalog();
    let results = query(catalog.tours(), &SearchFilters::default(), SortKey::Rating);
    assert_eq!(ids(&results), vec![5, 1, 2, 7, 3, 4, 6, 8]);
}

#[test]
fn every_sort_key_is_stable_and_repeatable() {
    let catalog = catalog();
    let filters = SearchFilters::default();

    let by_price = query(catalog.tours(), &filters, SortKey::Price);
    assert_eq!(ids(&by_price), vec![8, 4, 3, 1, 7, 2, 5, 6]);

    let by_duration = query(catalog.tours(), &filters, SortKey::Duration);
    assert_eq!(ids(&by_duration), vec![4, 1, 3, 5, 7, 2, 6, 8]);

    assert_eq!(ids(&query(catalog.tours(), &filters, SortKey::Duration)), ids(&by_duration));
}

#[test]
fn constraints_are_conjunctive() {
    let catalog = catalog();
    let filters = SearchFilters::default()
        .with_duration("3 days")
        .with_difficulty(Difficulty::Moderate);

    let results = query(catalog.tours(), &filters, SortKey::Rating);
    assert_eq!(ids(&results), vec![5, 2, 7]);
    assert!(results.iter().all(|t| t.difficulty == Difficulty::Moderate));
}

#[test]
fn price_bounds_are_inclusive() {
    let catalog = catalog();
    let filters = SearchFilters::default().with_price_range(Some(12000), Some(15000));
    assert_eq!(ids(&query(catalog.tours(), &filters, SortKey::Price)), vec![4, 3, 1]);

    let inverted = SearchFilters::default().with_price_range(Some(20000), Some(10000));
    assert!(query(catalog.tours(), &inverted, SortKey::Price).is_empty());
}

#[test]
fn featured_keeps_catalog_order() {
    let catalog = catalog();
    assert_eq!(ids(&featured(catalog.tours())), vec![1, 2, 3, 5]);
}

#[test]
fn resolver_defaults() {
    assert_eq!(resolve("Asia/Sylhet").city_name, "Sylhet");
    assert_eq!(resolve("America/Chicago").city_name, "Dhaka");
    assert_eq!(currency_for("GB"), "GBP");
    assert_eq!(currency_for("XX"), "BDT");
    assert_eq!(country_name_for("AE"), "United Arab Emirates");
    assert_eq!(country_name_for("XX"), "Bangladesh");
    assert_eq!(format_price(1000.0, "ZZZ"), "ZZZ 1000");
}

#[test]
fn geo_resolves_once() {
    let mut geo = GeoCurrency::unresolved(Default::default());
    assert_eq!(geo.currency(), "BDT");

    assert!(geo.resolve_once(&FixedTimezone("Asia/Khulna".into())));
    assert!(!geo.resolve_once(&FixedTimezone("Asia/Sylhet".into())));
    assert_eq!(geo.city_name(), Some("Khulna"));
}

#[test]
fn deep_link_drives_listing() {
    let catalog = catalog();
    let mut state = AppState::new(&catalog, Box::new(FixedTimezone("Asia/Dhaka".into())));

    let params = PageParams::from_query("?category=hill-tracts&sort=price&maxPrice=15000abc");
    assert!(state.apply_params(&params));
    assert_eq!(state.result_ids, vec![3]);

    let vm = state.compute_viewmodel();
    assert_eq!(vm.cards.len(), 1);
    assert!(vm.empty_state.is_none());
}

#[test]
fn booking_flow_reaches_endpoint() {
    let catalog = catalog();
    let mut state = AppState::new(&catalog, Box::new(FixedTimezone("Asia/Dhaka".into())));
    handle_event(&mut state, &Event::Mount).unwrap();
    handle_event(&mut state, &Event::SelectPackage(6)).unwrap();

    let fields = [
        BookingField::FirstName("Rafi".into()),
        BookingField::LastName("Ahmed".into()),
        BookingField::Email("rafi@example.com".into()),
        BookingField::Phone("+8801712345678".into()),
        BookingField::StartDay("12".into()),
        BookingField::StartMonth("December".into()),
        BookingField::StartYear("2099".into()),
    ];
    for field in fields {
        handle_event(&mut state, &Event::EditBooking(field)).unwrap();
    }

    let (_, actions) = handle_event(&mut state, &Event::SubmitBooking).unwrap();
    assert!(matches!(actions.as_slice(), [Action::Notify(_)]));

    handle_event(&mut state, &Event::EditBooking(BookingField::TermsAccepted(true))).unwrap();
    let (_, actions) = handle_event(&mut state, &Event::SubmitBooking).unwrap();
    let [Action::Submit(request)] = actions.as_slice() else {
        panic!("expected a submit action, got {actions:?}");
    };

    let reply = dispatch(request, &catalog);
    assert_eq!(reply.status, 200);
    let data = reply.body.data.unwrap();
    assert_eq!(data["tour"], "Sajek Valley Cloud Retreat");
    assert!(data["reference"].as_str().unwrap().starts_with("EN-"));
}

#[test]
fn endpoints_validate_input() {
    let catalog = catalog();

    let reply = dispatch(&ApiRequest::post("/api/newsletter", r#"{"email":"not-an-email"}"#), &catalog);
    assert_eq!(reply.status, 400);
    assert_eq!(reply.body.error.as_deref(), Some("Invalid email address"));

    let reply = dispatch(
        &ApiRequest::post("/api/contact", r#"{"name":"Mina","email":"mina@example.com","message":"Hi"}"#),
        &catalog,
    );
    assert_eq!(reply.status, 200);
    assert!(reply.body.success);
}

#[test]
fn catalog_files_override_bundled_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("categories.json");
    std::fs::write(
        &path,
        r#"[{"id": 1, "name": "Rivers", "slug": "rivers", "description": "", "icon": "boat", "color": "primary", "featured": true}]"#,
    )
    .unwrap();

    let catalog = JsonCatalog::load(None, Some(&path)).unwrap();
    assert_eq!(catalog.tours().len(), 8);
    assert_eq!(catalog.categories()[0].slug, "rivers");
}
