//! Integration tests for the screen controllers.
//!
//! Each test drives a controller against the recording backend and checks
//! the resulting view state, the navigation it asks for, and the requests
//! that went out.

mod common;

use common::{page_json, session, session_json, user_json, washery_json, TestApi};
use lavajato::models::{Coordinates, Filter};
use lavajato::screens::{
    ListingMode, LoginScreen, ProfileScreen, RegisterScreen, VehicleScreen, WasheryDetailScreen,
    WasheryListScreen,
};
use lavajato::state::{ScreenAction, ScreenId, ViewState};
use lavajato::utils::{PasswordChange, Registration};
use serde_json::json;

// ============================================================================
// LOGIN / REGISTER
// ============================================================================

#[tokio::test]
async fn login_success_navigates_to_list_and_clears_password() {
    let api = TestApi::new();
    api.backend.push_json(200, &session_json());

    let mut screen = LoginScreen::with_credentials("ana@example.com", "segredo");
    let action = screen.submit(&api.services).await;

    assert_eq!(action, ScreenAction::Navigate(ScreenId::WasheryList));
    assert_eq!(screen.state().loaded(), Some(&session()));
    assert!(screen.password.is_empty());
}

#[tokio::test]
async fn login_rejected_shows_message_and_stays() {
    let api = TestApi::new();
    api.backend.push_json(401, &json!({ "message": "Bad credentials" }));

    let mut screen = LoginScreen::with_credentials("ana@example.com", "errada");
    let action = screen.submit(&api.services).await;

    assert_eq!(action, ScreenAction::None);
    assert_eq!(screen.state().error(), Some("Invalid email or password."));
    assert_eq!(screen.password, "errada");
    assert!(!api.session().is_authenticated());
}

#[tokio::test]
async fn login_offline_reports_network_problem() {
    let api = TestApi::new();

    let mut screen = LoginScreen::with_credentials("ana@example.com", "segredo");
    screen.submit(&api.services).await;

    assert!(screen
        .state()
        .error()
        .is_some_and(|m| m.starts_with("Could not reach the server")));
}

#[tokio::test]
async fn register_mismatch_fails_locally() {
    let api = TestApi::new();
    let mut screen = RegisterScreen::new(Registration {
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        password: "abc".to_string(),
        confirm_password: "xyz".to_string(),
    });

    let action = screen.submit(&api.services).await;

    assert_eq!(action, ScreenAction::None);
    assert_eq!(screen.state().error(), Some("Passwords do not match."));
    assert_eq!(api.backend.request_count(), 0);
}

#[tokio::test]
async fn register_conflict_shows_server_message() {
    let api = TestApi::new();
    api.backend
        .push_json(409, &json!({ "mensagem": "Email já cadastrado" }));
    let mut screen = RegisterScreen::new(Registration {
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        password: "abc".to_string(),
        confirm_password: "abc".to_string(),
    });

    screen.submit(&api.services).await;

    assert_eq!(screen.state().error(), Some("Email já cadastrado"));
    assert_eq!(screen.form.password, "abc");
}

#[tokio::test]
async fn register_success_logs_in() {
    let api = TestApi::new();
    api.backend.push_json(201, &session_json());
    let mut screen = RegisterScreen::new(Registration {
        name: "Ana Souza".to_string(),
        email: "ana@example.com".to_string(),
        password: "abc".to_string(),
        confirm_password: "abc".to_string(),
    });

    let action = screen.submit(&api.services).await;

    assert_eq!(action, ScreenAction::Navigate(ScreenId::WasheryList));
    assert!(api.session().is_authenticated());
    assert!(screen.form.password.is_empty());
    assert!(screen.form.confirm_password.is_empty());
}

// ============================================================================
// WASHERY LIST
// ============================================================================

#[tokio::test]
async fn list_pages_forward_and_back() {
    let api = TestApi::new();
    api.backend.push_json(200, &page_json(1, 10, 0, 3));
    api.backend.push_json(200, &page_json(11, 10, 1, 3));
    api.backend.push_json(200, &page_json(1, 10, 0, 3));

    let mut screen = WasheryListScreen::new(10);
    screen.load(&api.services).await;
    assert_eq!(screen.state().loaded().unwrap().items().len(), 10);

    screen.next_page(&api.services).await;
    assert_eq!(screen.request().page, 1);
    assert_eq!(screen.state().loaded().unwrap().items()[0].id, 11);

    screen.previous_page(&api.services).await;
    assert_eq!(screen.request().page, 0);

    let pages: Vec<String> = api
        .backend
        .requests()
        .iter()
        .map(|r| r.query_pairs()[0].1.clone())
        .collect();
    assert_eq!(pages, vec!["0", "1", "0"]);
}

#[tokio::test]
async fn previous_on_first_page_makes_no_request() {
    let api = TestApi::new();
    api.backend.push_json(200, &page_json(1, 10, 0, 3));

    let mut screen = WasheryListScreen::new(10);
    screen.load(&api.services).await;
    let action = screen.previous_page(&api.services).await;

    assert!(matches!(action, ScreenAction::ShowMessage { .. }));
    assert_eq!(api.backend.request_count(), 1);
    assert_eq!(screen.request().page, 0);
}

#[tokio::test]
async fn search_mode_uses_search_route_from_given_page() {
    let api = TestApi::new();
    api.backend.push_json(200, &page_json(1, 3, 2, 3));

    let mut screen = WasheryListScreen::new(5);
    screen.set_mode(ListingMode::Search("Brilho".to_string()), 2);
    screen.load(&api.services).await;

    let request = api.backend.single_request();
    assert_eq!(request.url.path(), "/lava-jato/buscar");
    assert_eq!(
        request.query_pairs(),
        vec![
            ("nome".to_string(), "Brilho".to_string()),
            ("page".to_string(), "2".to_string()),
            ("size".to_string(), "5".to_string()),
        ]
    );
}

#[tokio::test]
async fn filter_mode_posts_filter() {
    let api = TestApi::new();
    api.backend.push_json(200, &page_json(1, 1, 0, 1));

    let mut screen = WasheryListScreen::new(10);
    let filter = Filter::default()
        .with_min_rating(3.5)
        .near(Coordinates::new(-15.7942, -47.8825));
    screen.set_mode(ListingMode::Filter(filter), 0);
    screen.load(&api.services).await;

    assert_eq!(
        api.backend.single_request().body,
        Some(json!({ "notaMinima": 3.5, "latLong": "-15.7942,-47.8825" }))
    );
}

#[tokio::test]
async fn nearby_mode_has_no_pages() {
    let api = TestApi::new();
    api.backend.push_json(200, &json!([washery_json(4, "Perto")]));

    let mut screen = WasheryListScreen::new(10);
    screen.set_mode(
        ListingMode::Nearby {
            coordinates: Coordinates::new(-15.7942, -47.8825),
            radius: Some(3.0),
        },
        0,
    );
    screen.load(&api.services).await;

    let listing = screen.state().loaded().unwrap();
    assert!(listing.page().is_none());
    assert_eq!(
        screen.open(0),
        ScreenAction::Navigate(ScreenId::WasheryDetail(4))
    );
    assert_eq!(screen.open(5), ScreenAction::None);

    let action = screen.next_page(&api.services).await;
    assert!(matches!(action, ScreenAction::ShowMessage { .. }));
    assert_eq!(api.backend.request_count(), 1);
}

#[tokio::test]
async fn list_failure_shows_message() {
    let api = TestApi::new();
    api.backend.push(500, "");

    let mut screen = WasheryListScreen::new(10);
    screen.load(&api.services).await;

    assert!(screen.state().error().is_some_and(|m| m.contains("unavailable")));
}

// ============================================================================
// WASHERY DETAIL
// ============================================================================

#[tokio::test]
async fn detail_loads_washery_then_services() {
    let api = TestApi::new();
    api.backend.push_json(200, &washery_json(5, "Brilho"));
    api.backend.push_json(
        200,
        &json!([{ "id": 1, "descricao": "Lavagem", "preco": 30.0, "lavaJatoId": 5 }]),
    );

    let mut screen = WasheryDetailScreen::new(5);
    let action = screen.load(&api.services).await;

    assert_eq!(action, ScreenAction::None);
    let detail = screen.state().loaded().unwrap();
    assert_eq!(detail.washery.name, "Brilho");
    assert_eq!(detail.services.len(), 1);

    let paths: Vec<String> = api
        .backend
        .requests()
        .iter()
        .map(|r| r.url.path().to_string())
        .collect();
    assert_eq!(paths, vec!["/lava-jato/5", "/servicos/lavajato/5"]);
}

#[tokio::test]
async fn detail_not_found_goes_back_to_list() {
    let api = TestApi::new();
    api.backend.push(404, "");

    let mut screen = WasheryDetailScreen::new(42);
    let action = screen.load(&api.services).await;

    assert_eq!(action, ScreenAction::Navigate(ScreenId::WasheryList));
    assert_eq!(screen.state().error(), Some("This washery no longer exists."));
    assert_eq!(api.backend.request_count(), 1);
}

// ============================================================================
// PROFILE
// ============================================================================

#[tokio::test]
async fn profile_without_session_navigates_to_login() {
    let api = TestApi::new();
    let mut screen = ProfileScreen::new();

    let action = screen.load(&api.services).await;

    assert_eq!(action, ScreenAction::Navigate(ScreenId::Login));
    assert!(screen.state().is_idle());
    assert_eq!(api.backend.request_count(), 0);
}

#[tokio::test]
async fn profile_expired_token_navigates_to_login() {
    let api = TestApi::logged_in();
    api.backend.push(401, "");
    let mut screen = ProfileScreen::new();

    let action = screen.load(&api.services).await;

    assert_eq!(action, ScreenAction::Navigate(ScreenId::Login));
    assert!(screen.state().error().is_some());
}

#[tokio::test]
async fn profile_save_updates_session() {
    let api = TestApi::logged_in();
    api.backend
        .push_json(200, &user_json("Ana Lima", "ana.lima@example.com"));
    let mut screen = ProfileScreen::new();

    let action = screen
        .save(&api.services, "Ana Lima", "ana.lima@example.com")
        .await;

    assert_eq!(action, ScreenAction::message("Profile", "Profile updated."));
    assert_eq!(screen.state().loaded().unwrap().name, "Ana Lima");
    assert_eq!(api.session().current().unwrap().display_name, "Ana Lima");
}

#[tokio::test]
async fn profile_save_rejects_bad_email_locally() {
    let api = TestApi::logged_in();
    let mut screen = ProfileScreen::new();

    screen.save(&api.services, "Ana", "ana-at-example").await;

    assert_eq!(screen.state().error(), Some("Email address is not valid."));
    assert_eq!(api.backend.request_count(), 0);
}

#[tokio::test]
async fn password_change_keeps_loaded_profile_on_empty_response() {
    let api = TestApi::logged_in();
    api.backend
        .push_json(200, &user_json("Ana Souza", "ana@example.com"));
    api.backend.push(204, "");
    let mut screen = ProfileScreen::new();
    screen.load(&api.services).await;

    let action = screen
        .change_password(
            &api.services,
            &PasswordChange {
                current_password: "velha".to_string(),
                new_password: "nova".to_string(),
                confirm_password: "nova".to_string(),
            },
        )
        .await;

    assert_eq!(action, ScreenAction::message("Profile", "Password changed."));
    assert_eq!(screen.state().loaded().unwrap().email, "ana@example.com");
}

#[tokio::test]
async fn password_change_mismatch_makes_no_request() {
    let api = TestApi::logged_in();
    let mut screen = ProfileScreen::new();

    screen
        .change_password(
            &api.services,
            &PasswordChange {
                current_password: "velha".to_string(),
                new_password: "nova".to_string(),
                confirm_password: "outra".to_string(),
            },
        )
        .await;

    assert_eq!(screen.state().error(), Some("Passwords do not match."));
    assert_eq!(api.backend.request_count(), 0);
}

// ============================================================================
// VEHICLES
// ============================================================================

#[test]
fn vehicle_screen_never_touches_the_network() {
    let api = TestApi::logged_in();
    let mut screen = VehicleScreen::new();

    screen.add("ABC1D23", "Civic", Some("prata"));
    screen.add("", "Gol", None);

    assert_eq!(screen.vehicles().len(), 1);
    assert!(matches!(screen.state(), ViewState::Failed(_)));
    assert_eq!(api.backend.request_count(), 0);
}
