use unitplan_model::{
    BenchmarkChoice, Dataset, FreeTextField, HierarchyLevel, PathLevel, RecordShape,
    SelectionPath, TextRecord, UnitDraft, is_reserved_export_key,
};

#[test]
fn free_text_keys_match_export_names() {
    let keys: Vec<&str> = FreeTextField::ALL.iter().map(|f| f.key()).collect();
    assert_eq!(
        keys,
        vec![
            "unitAim",
            "unitOutline",
            "unitKeywords",
            "unitOutcomes",
            "unitSkills",
            "unitLevels",
            "unitHot",
            "unitLifeLessons",
            "unitResources",
            "unitDiff",
            "unitLessons",
        ]
    );
}

#[test]
fn fixed_export_keys_are_reserved() {
    for key in ["textType", "grade", "book", "endVerse", "unitAim", "unitHot", "timestamp"] {
        assert!(is_reserved_export_key(key), "{key} should be reserved");
    }
    assert!(!is_reserved_export_key("benchmarkCode"));
    assert!(!is_reserved_export_key("Grade"));
}

#[test]
fn draft_setters_round_trip() {
    let mut draft = UnitDraft::default();
    for field in FreeTextField::ALL {
        draft.set_free_text(field, format!("value for {field}"));
    }
    for field in FreeTextField::ALL {
        assert_eq!(draft.free_text(field), format!("value for {field}"));
    }
    draft.benchmarks.push(BenchmarkChoice {
        key: "benchmarkCode".into(),
        code: "J.1".into(),
    });
    assert_eq!(draft.benchmark("benchmarkCode"), Some("J.1"));
    assert_eq!(draft.benchmark("benchmarkCodeHebrew"), None);
}

#[test]
fn draft_serializes_with_path() {
    let mut path = SelectionPath::new();
    path.set(PathLevel::Category, "Navi");
    path.set(PathLevel::Hierarchy(HierarchyLevel::Book), "Kings");
    let draft = UnitDraft {
        path,
        ..UnitDraft::default()
    };
    let json = serde_json::to_string(&draft).expect("serialize draft");
    let round: UnitDraft = serde_json::from_str(&json).expect("deserialize draft");
    assert_eq!(round, draft);
}

#[test]
fn dataset_reports_shape_and_size() {
    let dataset = Dataset::Text(vec![TextRecord::default(), TextRecord::default()]);
    assert_eq!(dataset.shape(), RecordShape::Text);
    assert_eq!(dataset.len(), 2);
    assert!(Dataset::empty(RecordShape::Halacha).is_empty());
    assert_eq!(RecordShape::Halacha.to_string(), "halacha");
}
