mod common;

use common::{ArgumentsController, owned, strings, two_screens};
use futures::join;
use std::{
    sync::{Arc, Mutex},
    time::Duration,
};
use waypoint::{
    BoxError, ControllerStage, NavigationError, RouteSpec, Router, RouterOptions,
    resolvers::FnResolver,
    routes,
    testing::{CountingResolver, Journal, JournalEntry, RecordingController},
};

#[tokio::test]
async fn test_same_controller_is_not_torn_down() {
    let journal = Journal::new();
    let router = Router::new(two_screens(&journal)).unwrap();

    assert!(router.navigate("home").await.unwrap());
    assert!(router.navigate("about").await.unwrap());

    assert_eq!(journal.created("home"), 1);
    assert!(journal.removals().is_empty());
    assert_eq!(
        journal.dispatches(),
        vec![
            ("home".to_string(), owned(&[]), strings(&["home"])),
            ("home".to_string(), owned(&[]), strings(&["about"])),
        ]
    );
}

#[tokio::test]
async fn test_switching_controllers_removes_previous_view_first() {
    let journal = Journal::new();
    let router = Router::new(two_screens(&journal)).unwrap();

    router.navigate("#home").await.unwrap();
    router.navigate("#items/42").await.unwrap();

    assert_eq!(
        journal.entries(),
        vec![
            JournalEntry::Created {
                controller: "home".to_string()
            },
            JournalEntry::Dispatched {
                controller: "home".to_string(),
                route: "home".to_string(),
                params: owned(&[]),
                parts: strings(&["home"]),
            },
            JournalEntry::Removed {
                controller: "home".to_string(),
                next_route: "items/:id".to_string(),
            },
            JournalEntry::Created {
                controller: "items".to_string()
            },
            JournalEntry::Dispatched {
                controller: "items".to_string(),
                route: "items/:id".to_string(),
                params: owned(&[Some("42")]),
                parts: strings(&["items"]),
            },
        ]
    );
    assert_eq!(router.active_controller().await.unwrap().name(), "items");
}

#[tokio::test]
async fn test_returning_reuses_the_first_instance() {
    let journal = Journal::new();
    let router = Router::new(two_screens(&journal)).unwrap();

    for fragment in ["home", "items", "home", "items/1"] {
        router.navigate(fragment).await.unwrap();
    }

    assert_eq!(journal.created("home"), 1);
    assert_eq!(journal.created("items"), 1);
    assert_eq!(
        journal.removals(),
        vec![
            ("home".to_string(), "items".to_string()),
            ("items".to_string(), "home".to_string()),
            ("home".to_string(), "items/:id".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_later_declared_routes_win() {
    let journal = Journal::new();
    let configs = routes![
        RecordingController::controller_type("items", &journal) => [
            RouteSpec::new("items/new").default_route(),
            "items/:id",
        ],
    ];
    let router = Router::new(configs).unwrap();

    router.navigate("items/new").await.unwrap();

    assert_eq!(
        journal.dispatches(),
        vec![("items".to_string(), owned(&[Some("new")]), strings(&["items"]))]
    );
}

#[tokio::test]
async fn test_unmatched_fragment_falls_back_to_default() {
    let journal = Journal::new();
    let router = Router::new(two_screens(&journal)).unwrap();

    router.navigate("no/such/screen").await.unwrap();

    assert_eq!(
        journal.dispatches(),
        vec![(
            "home".to_string(),
            owned(&[Some("no/such/screen")]),
            strings(&["home"])
        )]
    );
}

#[tokio::test]
async fn test_lenient_router_without_default() {
    let journal = Journal::new();
    let configs = routes![RecordingController::controller_type("home", &journal) => ["home"]];
    let router = Router::builder(configs)
        .options(RouterOptions::default().require_default(false))
        .build()
        .unwrap();

    let err = router.navigate("elsewhere").await.unwrap_err();
    assert!(matches!(err, NavigationError::NoDefaultRoute));
    assert!(router.active_controller().await.is_none());

    router.navigate("home").await.unwrap();
    assert_eq!(journal.dispatches().len(), 1);
}

#[tokio::test]
async fn test_query_string_is_passed_as_last_param() {
    let journal = Journal::new();
    let router = Router::new(two_screens(&journal)).unwrap();

    router.navigate("items/7?tab=reviews").await.unwrap();

    assert_eq!(
        journal.dispatches()[0].1,
        owned(&[Some("7"), Some("tab=reviews")])
    );
}

#[tokio::test]
async fn test_arguments_list_params_before_parts() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let configs = routes![
        ArgumentsController::controller_type(&calls) => [
            RouteSpec::new("docs(/:section)").default_route(),
            RouteSpec::new("files/:drive/*path").parts("files/browse"),
        ],
    ];
    let router = Router::new(configs).unwrap();

    router.navigate("docs").await.unwrap();
    router.navigate("docs/intro").await.unwrap();
    router.navigate("files/c/a/b.txt").await.unwrap();

    assert_eq!(
        *calls.lock().unwrap(),
        vec![
            strings(&["-", "[docs]"]),
            strings(&["intro", "[docs]"]),
            strings(&["c", "a/b.txt", "[files,browse]"]),
        ]
    );
}

#[tokio::test]
async fn test_shared_instance_across_groups_is_not_torn_down() {
    let journal = Journal::new();
    let shared = RecordingController::shared("shell", &journal);
    let configs = routes![
        shared.clone() => [RouteSpec::new("inbox").default_route()],
        shared => ["outbox"],
    ];
    let router = Router::new(configs).unwrap();

    router.navigate("inbox").await.unwrap();
    router.navigate("outbox").await.unwrap();

    assert!(journal.removals().is_empty());
    assert_eq!(journal.dispatches().len(), 2);
}

#[tokio::test]
async fn test_identifier_without_resolver_fails() {
    let configs = routes!["screens/home" => [RouteSpec::new("home").default_route()]];
    let router = Router::new(configs).unwrap();

    let err = router.navigate("home").await.unwrap_err();
    assert!(matches!(
        err,
        NavigationError::Resolution { ref controller, .. } if controller == "screens/home"
    ));
    assert_eq!(
        router.dispatcher().stage(0).await,
        Some(ControllerStage::Unresolved)
    );
}

#[tokio::test]
async fn test_concurrent_navigations_resolve_once() {
    let journal = Journal::new();
    let loader_journal = journal.clone();
    let resolver = CountingResolver::new(FnResolver::new(move |identifier: String| {
        let journal = loader_journal.clone();
        async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            Ok::<_, BoxError>(RecordingController::controller_type(identifier, &journal))
        }
    }));
    let counter = resolver.clone();

    let configs = routes![
        "screens/items" => [RouteSpec::new("items").default_route(), "items/:id"],
    ];
    let router = Router::builder(configs).resolver(resolver).build().unwrap();

    let (first, second) = join!(router.navigate("items"), router.navigate("items/3"));
    first.unwrap();
    second.unwrap();

    assert_eq!(counter.count(), 1);
    assert_eq!(journal.created("screens/items"), 1);
    assert_eq!(journal.dispatches().len(), 2);
    assert!(journal.removals().is_empty());
}
