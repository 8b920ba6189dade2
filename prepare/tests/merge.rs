use unicode_case_prepare::merge::ConditionSet;
use unicode_case_prepare::*;
use unicode_case_source::{DefaultMapping, OutputSequence, SimpleCaseMapping, SpecialCasing};

const CODE: u32 = 0x130;

fn default_lower(code: u32, lower: u32) -> DefaultMapping
{
    DefaultMapping {
        code,
        lower: SimpleCaseMapping::Some(lower),
        title: SimpleCaseMapping::None,
        upper: SimpleCaseMapping::None,
    }
}

fn special_lower(code: u32, lower: &[u32], conditions: &[&str]) -> SpecialCasing
{
    SpecialCasing {
        code,
        lower: OutputSequence::new(lower),
        title: None,
        upper: None,
        conditions: conditions.iter().map(|c| c.to_string()).collect(),
    }
}

/// результаты и условия правил кодпоинта
fn summary(rules: &MergedRules, direction: Direction, code: u32) -> Vec<(Vec<u32>, Vec<String>)>
{
    rules
        .rules(direction, code)
        .unwrap()
        .iter()
        .map(|r| (r.output.as_slice().to_vec(), r.conditions.iter().cloned().collect()))
        .collect()
}

fn rule(output: &[u32], conditions: &[&str]) -> (Vec<u32>, Vec<String>)
{
    (output.to_vec(), conditions.iter().map(|c| c.to_string()).collect())
}

/// условные специальные правила - раньше безусловного простого
#[test]
fn precedence()
{
    let rules = merge(
        MergePolicy::Fallback,
        &[default_lower(CODE, 0x58)],
        &[
            special_lower(CODE, &[0x59], &["tr"]),
            special_lower(CODE, &[0x5A], &["az"]),
        ],
    );

    assert_eq!(
        summary(&rules, Direction::Lower, CODE),
        vec![rule(&[0x59], &["tr"]), rule(&[0x5A], &["az"]), rule(&[0x58], &[])]
    );

    let provenance: Vec<Provenance> = rules
        .rules(Direction::Lower, CODE)
        .unwrap()
        .iter()
        .map(|r| r.provenance)
        .collect();

    assert_eq!(provenance, vec![Provenance::Special, Provenance::Special, Provenance::Default]);
}

/// первое же специальное правило отбрасывает простое, даже условное
#[test]
fn replace_discards_default()
{
    let rules = merge(
        MergePolicy::Replace,
        &[default_lower(CODE, 0x58)],
        &[
            special_lower(CODE, &[0x59], &["tr"]),
            special_lower(CODE, &[0x5A], &["az"]),
        ],
    );

    assert_eq!(
        summary(&rules, Direction::Lower, CODE),
        vec![rule(&[0x59], &["tr"]), rule(&[0x5A], &["az"])]
    );
}

/// специальное правило без условий полностью заменяет простое при любой политике
#[test]
fn replacement()
{
    for policy in [MergePolicy::Replace, MergePolicy::Fallback] {
        let rules = merge(
            policy,
            &[default_lower(CODE, 0x58)],
            &[special_lower(CODE, &[0x69, 0x307], &[])],
        );

        assert_eq!(
            summary(&rules, Direction::Lower, CODE),
            vec![rule(&[0x69, 0x307], &[])],
            "{:?}",
            policy
        );
    }
}

/// безусловное правило перемещается в конец, относительный порядок условных сохраняется
#[test]
fn unconditional_moved_last()
{
    let rules = merge(
        MergePolicy::Replace,
        &[default_lower(CODE, 0x69)],
        &[
            special_lower(CODE, &[0x69, 0x307], &[]),
            special_lower(CODE, &[0x69], &["tr"]),
            special_lower(CODE, &[0x69], &["az"]),
        ],
    );

    assert_eq!(
        summary(&rules, Direction::Lower, CODE),
        vec![
            rule(&[0x69], &["tr"]),
            rule(&[0x69], &["az"]),
            rule(&[0x69, 0x307], &[])
        ]
    );
}

/// повторы удаляются, первое вхождение сохраняет своё место
#[test]
fn duplicates_removed()
{
    let rules = merge(
        MergePolicy::Replace,
        &[],
        &[
            special_lower(CODE, &[0x59], &["tr", "After_I"]),
            special_lower(CODE, &[0x5A], &["az"]),
            special_lower(CODE, &[0x59], &["After_I", "tr"]),
        ],
    );

    assert_eq!(
        summary(&rules, Direction::Lower, CODE),
        vec![rule(&[0x59], &["After_I", "tr"]), rule(&[0x5A], &["az"])]
    );
}

/// одинаковые результаты с разными условиями - разные правила
#[test]
fn same_output_different_conditions_kept()
{
    let rules = merge(
        MergePolicy::Replace,
        &[],
        &[
            special_lower(CODE, &[0x69], &["tr"]),
            special_lower(CODE, &[0x69], &["az"]),
            special_lower(CODE, &[0x69], &["tr", "az"]),
        ],
    );

    assert_eq!(rules.rules(Direction::Lower, CODE).unwrap().len(), 3);
}

/// несколько различных безусловных правил: остаётся последнее, генерация продолжается
#[test]
fn several_unconditional_last_wins()
{
    let rules = merge(
        MergePolicy::Replace,
        &[],
        &[
            special_lower(CODE, &[0x59], &[]),
            special_lower(CODE, &[0x5A], &["tr"]),
            special_lower(CODE, &[0x5B], &[]),
        ],
    );

    assert_eq!(
        summary(&rules, Direction::Lower, CODE),
        vec![rule(&[0x5A], &["tr"]), rule(&[0x5B], &[])]
    );
}

/// повторное простое отображение заменяет предыдущее
#[test]
fn repeated_default_last_wins()
{
    let rules = merge(
        MergePolicy::Replace,
        &[default_lower(CODE, 0x58), default_lower(CODE, 0x59)],
        &[],
    );

    assert_eq!(summary(&rules, Direction::Lower, CODE), vec![rule(&[0x59], &[])]);
}

/// специальные правила заменяют простые только в своём направлении
#[test]
fn directions_are_independent()
{
    let default = DefaultMapping {
        code: 0xDF,
        lower: SimpleCaseMapping::None,
        title: SimpleCaseMapping::Some(0x1E9E),
        upper: SimpleCaseMapping::Some(0x1E9E),
    };

    let special = SpecialCasing {
        code: 0xDF,
        lower: OutputSequence::new(&[0xDF]),
        title: OutputSequence::new(&[0x53, 0x73]),
        upper: None,
        conditions: vec![],
    };

    let rules = merge(MergePolicy::Replace, &[default], &[special]);

    assert_eq!(summary(&rules, Direction::Lower, 0xDF), vec![rule(&[0xDF], &[])]);
    assert_eq!(summary(&rules, Direction::Title, 0xDF), vec![rule(&[0x53, 0x73], &[])]);
    assert_eq!(summary(&rules, Direction::Upper, 0xDF), vec![rule(&[0x1E9E], &[])]);
    assert_eq!(rules.len(), 3);
}

/// результаты и условия всех направлений собираются в упорядоченные наборы
#[test]
fn pooled_sequences_and_conditions()
{
    let rules = merge(
        MergePolicy::Replace,
        &[default_lower(0x41, 0x61), default_lower(0x42, 0x62)],
        &[
            special_lower(0x130, &[0x69, 0x307], &[]),
            special_lower(0x130, &[0x69], &["tr"]),
            special_lower(0x3A3, &[0x3C2], &["Final_Sigma"]),
        ],
    );

    let sequences: Vec<Vec<u32>> = rules
        .output_sequences()
        .iter()
        .map(|s| s.as_slice().to_vec())
        .collect();

    assert_eq!(
        sequences,
        vec![vec![0x61], vec![0x62], vec![0x69], vec![0x69, 0x307], vec![0x3C2]]
    );

    let conditions: Vec<&str> = rules.condition_names().into_iter().collect();
    assert_eq!(conditions, vec!["Final_Sigma", "tr"]);
}

/// порядок кодпоинтов в результате не зависит от порядка записей
#[test]
fn codepoints_ascending()
{
    let rules = merge(
        MergePolicy::Replace,
        &[default_lower(0x43, 0x63), default_lower(0x41, 0x61), default_lower(0x42, 0x62)],
        &[],
    );

    let codes: Vec<u32> = rules.get(Direction::Lower).keys().copied().collect();
    assert_eq!(codes, vec![0x41, 0x42, 0x43]);
}

#[test]
fn merger_step_by_step()
{
    let mut merger = RuleMerger::new(MergePolicy::Fallback);

    merger.add_default(&default_lower(0x3A3, 0x3C3));
    merger.add_special(&special_lower(0x3A3, &[0x3C2], &["Final_Sigma"]));

    let rules = merger.finish();
    let list = rules.rules(Direction::Lower, 0x3A3).unwrap();

    assert_eq!(list.len(), 2);
    assert_eq!(
        list[0].conditions,
        ConditionSet::from(["Final_Sigma".to_owned()])
    );
    assert!(list[1].is_unconditional());
    assert!(rules.rules(Direction::Upper, 0x3A3).is_none());
}

#[test]
fn merge_policy_from_str()
{
    assert_eq!("replace".parse::<MergePolicy>(), Ok(MergePolicy::Replace));
    assert_eq!("fallback".parse::<MergePolicy>(), Ok(MergePolicy::Fallback));
    assert!("coexist".parse::<MergePolicy>().is_err());
    assert_eq!(MergePolicy::default(), MergePolicy::Replace);
}

/// условие записи без отображений не создаёт правил, но остаётся в перечислении условий
#[test]
fn conditions_of_empty_special()
{
    let empty = SpecialCasing {
        code: 0x130,
        lower: None,
        title: None,
        upper: None,
        conditions: vec!["After_I".to_owned()],
    };

    let rules = merge(
        MergePolicy::Replace,
        &[],
        &[empty, special_lower(0x131, &[0x131], &["tr"])],
    );

    assert!(rules.rules(Direction::Lower, 0x130).is_none());
    assert!(rules.iter().all(|r| !r.conditions.contains("After_I")));

    let conditions: Vec<&str> = rules.condition_names().into_iter().collect();
    assert_eq!(conditions, vec!["After_I", "tr"]);
}
