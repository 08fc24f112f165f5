// Integration tests for AromaCraft
use aromacraft::screen::{transition, Control, Navigator, Screen};
use aromacraft::{
    score_pair, similarity_matrix, tanimoto, AromaService, Compound, Endpoint, Error,
    MolecularProfile, PairingRanker, SourceMode, SourcesConfig,
};
use std::time::Duration;

fn profile(name: &str, ids: &[&str]) -> MolecularProfile {
    MolecularProfile::from_ids(name, ids.iter().copied())
}

/// Config whose upstreams all refuse connections
fn unreachable(mode: SourceMode) -> SourcesConfig {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/", listener.local_addr().unwrap());
    drop(listener);

    SourcesConfig {
        flavordb: Endpoint::new(url.clone(), "test-key"),
        recipedb: Endpoint::new(url.clone(), "test-key"),
        foodoscope: Endpoint::new(url, "test-key"),
        mode,
        timeout: Duration::from_secs(2),
    }
}

#[test]
fn test_tanimoto_reference_values() {
    let basil = MolecularProfile::new(
        "basil",
        vec![
            Compound::new("mol_001", "Linalool", "Terpenes", "Floral"),
            Compound::new("mol_002", "Eugenol", "Phenylpropanoids", "Spicy"),
            Compound::new("mol_003", "Limonene", "Terpenes", "Citrus"),
        ],
    );
    let other = profile("other", &["mol_001", "mol_003"]);
    assert!((tanimoto(&basil, &other) - 2.0 / 3.0).abs() < 1e-6);
    assert_eq!(format!("{:.3}", tanimoto(&basil, &other)), "0.667");

    let linalool = profile("a", &["mol_001"]);
    let eugenol = profile("b", &["mol_002"]);
    assert_eq!(tanimoto(&linalool, &eugenol), 0.0);
}

#[test]
fn test_tanimoto_properties() {
    let profiles = vec![
        profile("a", &["mol_001", "mol_002", "mol_003"]),
        profile("b", &["mol_002", "mol_004"]),
        profile("c", &["mol_005"]),
        profile("d", &[]),
    ];

    for a in &profiles {
        for b in &profiles {
            let ab = tanimoto(a, b);
            assert_eq!(ab, tanimoto(b, a));
            assert!((0.0..=1.0).contains(&ab));
        }
        if !a.is_empty() {
            assert_eq!(tanimoto(a, a), 1.0);
        }
    }

    let empty = profile("e", &[]);
    assert_eq!(tanimoto(&empty, &empty), 0.0);
}

#[test]
fn test_matrix_matches_pairwise_scores() {
    let profiles = vec![
        profile("basil", &["mol_001", "mol_002", "mol_003"]),
        profile("lemon", &["mol_001", "mol_003", "mol_013"]),
        profile("garlic", &["mol_007", "mol_008"]),
    ];
    let matrix = similarity_matrix(&profiles);

    for (i, row) in matrix.iter().enumerate() {
        for (j, score) in row.iter().enumerate() {
            assert_eq!(*score, score_pair(&profiles[i], &profiles[j]).score);
        }
    }
}

#[test]
fn test_ranker_min_score() {
    let base = profile("basil", &["mol_001", "mol_002", "mol_003"]);
    let candidates = vec![
        profile("lemon", &["mol_001", "mol_003", "mol_013"]),
        profile("garlic", &["mol_007", "mol_008"]),
    ];

    let ranked = PairingRanker::new().with_min_score(0.1).rank(&base, &candidates, 10);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].ingredient, "lemon");
}

#[tokio::test]
async fn test_fallback_profile_when_upstream_down() {
    let service = AromaService::from_config(&unreachable(SourceMode::Fallback)).unwrap();
    let basil = service.profile("basil").await.unwrap();

    let compounds: Vec<(&str, &str, &str)> = basil
        .compounds()
        .map(|c| (c.id.as_str(), c.name.as_str(), c.family.as_str()))
        .collect();
    assert_eq!(
        compounds,
        vec![
            ("mol_001", "Linalool", "Terpenes"),
            ("mol_002", "Eugenol", "Phenylpropanoids"),
            ("mol_003", "Limonene", "Terpenes"),
        ]
    );
}

#[tokio::test]
async fn test_fallback_recipe_search_when_upstream_down() {
    let service = AromaService::from_config(&unreachable(SourceMode::Fallback)).unwrap();
    let query = vec!["tomato".to_string(), "basil".to_string(), "garlic".to_string()];

    let recipes = service.search_recipes(&query).await.unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].ingredients, query);

    let history = service.cooking_history("user_123").await.unwrap();
    assert_eq!(history.len(), 5);
}

#[tokio::test]
async fn test_strict_mode_surfaces_upstream_errors() {
    let service = AromaService::from_config(&unreachable(SourceMode::Strict)).unwrap();

    let err = service.profile("basil").await.unwrap_err();
    assert!(matches!(err, Error::Upstream { .. }));

    let query = vec!["tomato".to_string()];
    assert!(service.search_recipes(&query).await.unwrap_err().is_upstream());
    assert!(service.cooking_history("user_123").await.unwrap_err().is_upstream());
}

#[tokio::test]
async fn test_blank_names_rejected() {
    for mode in [SourceMode::Sample, SourceMode::Fallback, SourceMode::Strict] {
        let service = AromaService::from_config(&unreachable(mode)).unwrap();
        assert!(matches!(service.profile("   ").await, Err(Error::InvalidInput(_))));
        assert!(matches!(service.compound("").await, Err(Error::InvalidInput(_))));
        assert!(matches!(
            service.search_recipes(&["basil".to_string(), "".to_string()]).await,
            Err(Error::InvalidInput(_))
        ));
    }
}

#[tokio::test]
async fn test_sample_mode_end_to_end() {
    let config = SourcesConfig::from_lookup(|key| match key {
        "AROMACRAFT_SOURCE_MODE" => Some("sample".to_string()),
        _ => None,
    })
    .unwrap();
    let service = AromaService::from_config(&config).unwrap();
    assert_eq!(service.mode(), SourceMode::Sample);

    let candidates: Vec<String> = ["tomato", "oregano", "lemon"].iter().map(|s| s.to_string()).collect();
    let ranked = service.pairings("basil", &candidates, 10).await.unwrap();
    assert_eq!(ranked[0].ingredient, "lemon");

    let recipe = service.recipe("basil-tomato-soup").await.unwrap().unwrap();
    assert_eq!(recipe.instructions[0].step, 1);
    assert!(service.recipe("nope").await.unwrap().is_none());
}

#[test]
fn test_screen_transitions() {
    for from in Screen::DEMO_NAV {
        assert_eq!(transition(from, Control::DemoNav(Screen::Improviser)), Screen::Improviser);
        assert_eq!(transition(from, Control::HeaderLogo), Screen::Landing);
    }

    // foreign control is a no-op
    assert_eq!(transition(Screen::Voice, Control::GenerateRecipes), Screen::Voice);

    let mut nav = Navigator::new();
    assert_eq!(nav.current(), Screen::Landing);
    assert_eq!(nav.activate(Control::LaunchApp), Screen::Pantry);
    assert_eq!(nav.activate(Control::GenerateRecipes), Screen::Recipe);
    assert_eq!(nav.activate(Control::StartVoiceCooking), Screen::Voice);
    assert_eq!(nav.activate(Control::HeaderLogin), Screen::Login);
}
