use harvester_core::{
    BatchOptions, CandidateService, EmailCandidateBuilder, GenerateError, GeneratorConfig,
    NameOutcome, SkipReason, SubstitutionTable, TranscriptError, Transcriptor,
    TransliterationEngine, HIDDEN_MEMBER_PLACEHOLDER,
};
use std::sync::Arc;

fn single_substitution_service(domains: &[&str], full_name: bool) -> CandidateService {
    let table = SubstitutionTable::from_entries([
        ('и', vec!["i"]),
        ('в', vec!["v"]),
        ('а', vec!["a"]),
        ('н', vec!["n"]),
        ('п', vec!["p"]),
        ('е', vec!["e"]),
        ('т', vec!["t"]),
        ('р', vec!["r"]),
        ('о', vec!["o"]),
        (' ', vec![" "]),
    ])
    .unwrap();
    let transcriptor = Transcriptor::new(TransliterationEngine::new(Arc::new(table)));
    let builder = EmailCandidateBuilder::new(domains, full_name).unwrap();
    CandidateService::new(transcriptor, builder)
}

fn builtin_service(domains: &[&str]) -> CandidateService {
    GeneratorConfig::new(domains.iter().copied())
        .build_service()
        .expect("builtin config")
}

#[test]
fn cyrillic_name_end_to_end() {
    let service = single_substitution_service(&["firm.io"], true);
    let candidates = service.candidates_for("Иван Петров").unwrap();
    assert_eq!(candidates, vec!["ivan.petrov@firm.io"]);
}

#[test]
fn builtin_table_expands_ambiguous_letters() {
    let service = builtin_service(&["@corp.com"]);
    let candidates = service.candidates_for("Иван Петров").unwrap();
    assert_eq!(
        candidates,
        vec!["ivan.petrov@corp.com", "ivan.pyetrov@corp.com"]
    );
}

#[test]
fn batch_skips_per_name_failures_and_keeps_order() {
    let service = builtin_service(&["corp.com"]);
    let report = service
        .generate(
            [
                "Ivan Petrov",
                HIDDEN_MEMBER_PLACEHOLDER,
                "Madonna",
                "  Anna   Smith ",
                "Ivan S. Petrov",
                "",
            ],
            &BatchOptions::default(),
        )
        .unwrap();

    assert_eq!(
        report.candidates,
        vec!["ivan.petrov@corp.com", "anna.smith@corp.com"]
    );
    assert_eq!(report.generated_count(), 2);
    assert_eq!(
        report.skipped().collect::<Vec<_>>(),
        vec![
            (HIDDEN_MEMBER_PLACEHOLDER, SkipReason::Placeholder),
            ("Madonna", SkipReason::NoPatternMatch),
            ("Ivan S. Petrov", SkipReason::Unsupported),
            ("", SkipReason::Placeholder),
        ]
    );
    assert_eq!(
        report.outcomes[3],
        NameOutcome::Generated {
            name: "Anna Smith".to_string(),
            candidates: 1,
        }
    );
}

#[test]
fn dedup_collapses_candidates_across_names() {
    let service = builtin_service(&["corp.com"]);
    let names = ["Ivan Petrov", "Иван Петров"];

    let plain = service.generate(names, &BatchOptions::default()).unwrap();
    assert_eq!(
        plain.candidates,
        vec![
            "ivan.petrov@corp.com",
            "ivan.petrov@corp.com",
            "ivan.pyetrov@corp.com",
        ]
    );

    let deduped = service.generate(names, &BatchOptions { dedup: true }).unwrap();
    assert_eq!(
        deduped.candidates,
        vec!["ivan.petrov@corp.com", "ivan.pyetrov@corp.com"]
    );
    assert_eq!(
        deduped.outcomes[1],
        NameOutcome::Generated {
            name: "Иван Петров".to_string(),
            candidates: 1,
        }
    );
}

#[test]
fn unknown_character_aborts_the_batch() {
    let service = single_substitution_service(&["firm.io"], false);
    let err = service
        .generate(["Ivan Petrov", "Олег Попов", "Anna Smith"], &BatchOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        GenerateError::Transcript(TranscriptError::UnknownCharacter { character: 'л', .. })
    ));
}

#[test]
fn initial_convention_over_builtin_table() {
    let mut config = GeneratorConfig::new(["firm.io", "@firm.ru"]);
    config.full_name = false;
    let service = config.build_service().unwrap();
    let candidates = service.candidates_for("Анна Смирнова").unwrap();
    assert_eq!(candidates, vec!["a.smirnova@firm.io", "a.smirnova@firm.ru"]);
}

#[test]
fn report_serializes_with_status_tags() {
    let service = builtin_service(&["corp.com"]);
    let report = service
        .generate(["Ivan Petrov", "Madonna"], &BatchOptions::default())
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["outcomes"][0]["status"], "generated");
    assert_eq!(json["outcomes"][0]["candidates"], 1);
    assert_eq!(json["outcomes"][1]["status"], "skipped");
    assert_eq!(json["outcomes"][1]["reason"], "no_pattern_match");
}
