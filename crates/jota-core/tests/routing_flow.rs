//! End-to-end routing flows over a sled-backed store.

use std::sync::Arc;

use jota_core::{
    ActivityRouter, EvolvedTemplateStore, RouteOrigin, SledTemplateStorage, TemplateRegistry,
};

fn router_on(dir: &tempfile::TempDir) -> ActivityRouter {
    let storage = SledTemplateStorage::open_path(dir.path()).expect("abrir sled");
    ActivityRouter::new(
        Arc::new(TemplateRegistry::new()),
        Arc::new(EvolvedTemplateStore::new(Box::new(storage))),
    )
}

#[tokio::test]
async fn caca_palavras_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let router = router_on(&dir);

    let result = router
        .route_activity_request("Crie um caça-palavras sobre o sistema solar para o 5º ano", None)
        .await;

    assert_eq!(result.origin, RouteOrigin::TextTemplate);
    assert_eq!(result.template_id.as_deref(), Some("caca_palavras"));
    assert_eq!(result.category, Some("jogos_educativos"));

    let prompt = router
        .get_prompt_for_route(
            &result,
            "Crie um caça-palavras sobre o sistema solar para o 5º ano",
            Some("Turma 5B, ciências"),
        )
        .expect("rota com template produz prompt");
    assert!(prompt.contains("sistema solar"));
    assert!(prompt.contains("Turma 5B"));
    assert!(prompt.contains("Grade do Caça-Palavras"));
    assert!(!prompt.contains("{solicitacao}"));
    assert!(!prompt.contains("{contexto}"));
}

#[tokio::test]
async fn tier_precedence_between_interactive_and_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let router = router_on(&dir);

    let interactive = router
        .route_activity_request("crie uma lista de exercícios de matemática", None)
        .await;
    assert_eq!(interactive.origin, RouteOrigin::Interactive);
    assert_eq!(
        interactive.metadata.interactive_activity_id,
        Some("lista-exercicios")
    );

    let textual = router
        .route_activity_request("crie uma prova dissertativa de matemática", None)
        .await;
    assert_eq!(textual.origin, RouteOrigin::TextTemplate);
    assert_eq!(textual.template_id.as_deref(), Some("questoes_dissertativas"));
}

#[tokio::test]
async fn evolved_template_survives_restart_and_counts_usage() {
    let dir = tempfile::tempdir().unwrap();

    let first_id = {
        let router = router_on(&dir);
        let result = router
            .route_activity_request("crie um escape room pedagógico sobre frações", None)
            .await;
        assert_eq!(result.origin, RouteOrigin::AutoGenerated);
        result.template_id.unwrap()
    };

    // new process: same sled tree, the evolved tier now matches directly
    let router = router_on(&dir);
    let result = router
        .route_activity_request("quero outro escape room pedagógico", None)
        .await;
    assert_eq!(result.origin, RouteOrigin::AutoGenerated);
    assert_eq!(result.template_id.as_deref(), Some(first_id.as_str()));

    match result.template.unwrap() {
        jota_core::MatchedTemplate::Evolved(t) => assert_eq!(t.usage_count, 2),
        jota_core::MatchedTemplate::Catalog(_) => panic!("esperava template evoluído"),
    }
}

#[tokio::test]
async fn diacritics_do_not_change_the_route() {
    let dir = tempfile::tempdir().unwrap();
    let router = router_on(&dir);

    let accented = router
        .route_activity_request("Crie uma PRÓVA bimestral de ciências", None)
        .await;
    let plain = router
        .route_activity_request("crie uma prova bimestral de ciencias", None)
        .await;

    assert_eq!(accented.origin, plain.origin);
    assert_eq!(accented.template_id, plain.template_id);
}

#[tokio::test]
async fn free_document_fallback_is_total() {
    let dir = tempfile::tempdir().unwrap();
    let router = router_on(&dir);

    for text in ["", "   \t  ", "🎉✨🌈", "bom dia, professor!"] {
        let result = router.route_activity_request(text, None).await;
        assert_eq!(result.origin, RouteOrigin::FreeDocument, "input: {text:?}");
        assert!(result.template.is_none());
        assert!(router.get_prompt_for_route(&result, text, None).is_none());
    }

    // nothing was evolved along the way
    assert_eq!(router.stats().evolved_templates, 0);
}
