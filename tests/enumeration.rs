use std::collections::BTreeSet;

use otter_asp::{
    builder::program::{parse_program, Rule},
    config::Config,
    context::{Context, ContextState},
};

/// The answer sets of a program, as sorted lists of names, sorted.
fn answer_sets_of(program: &str, config: Config) -> Vec<Vec<String>> {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut the_context = Context::from_config(config);
    let store = the_context.read_program(program.as_bytes()).unwrap();

    let mut answer_sets = the_context
        .answer_sets()
        .map(|answer_set| {
            let mut names = store
                .names_of(&answer_set.unwrap())
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>();
            names.sort();
            names
        })
        .collect::<Vec<_>>();
    answer_sets.sort();

    assert!(matches!(
        the_context.state,
        ContextState::Exhausted | ContextState::Unsatisfiable
    ));

    answer_sets
}

/// The stable models of a program, by examination of every candidate set of atoms.
fn stable_models(program: &str) -> Vec<Vec<String>> {
    let rules = parse_program(program.as_bytes()).unwrap();

    let atoms = rules
        .iter()
        .flat_map(|rule| rule.head.iter().chain(rule.positive.iter()).chain(rule.negative.iter()))
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect::<Vec<_>>();
    assert!(atoms.len() < 16);

    let mut models = Vec::default();
    for mask in 0..(1_usize << atoms.len()) {
        let candidate = atoms
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .map(|(_, atom)| atom.clone())
            .collect::<BTreeSet<_>>();

        if is_stable(&rules, &candidate) {
            models.push(candidate.into_iter().collect::<Vec<_>>());
        }
    }
    models.sort();
    models
}

/// Whether the candidate is the least model of the reduct of the rules, and violates no constraint.
fn is_stable(rules: &[Rule], candidate: &BTreeSet<String>) -> bool {
    let blocked = |rule: &Rule| rule.negative.iter().any(|atom| candidate.contains(atom));

    for rule in rules.iter().filter(|rule| rule.head.is_none()) {
        if !blocked(rule) && rule.positive.iter().all(|atom| candidate.contains(atom)) {
            return false;
        }
    }

    let mut least = BTreeSet::default();
    loop {
        let mut fresh = false;
        for rule in rules.iter().filter(|rule| !blocked(rule)) {
            if let Some(head) = &rule.head {
                if !least.contains(head) && rule.positive.iter().all(|atom| least.contains(atom)) {
                    least.insert(head.clone());
                    fresh = true;
                }
            }
        }
        if !fresh {
            break;
        }
    }

    &least == candidate
}

mod enumeration {
    use super::*;

    #[test]
    fn independent_choices() {
        let program = "
            a :- not na. na :- not a.
            b :- not nb. nb :- not b.
            c :- not nc. nc :- not c.
            d :- not nd. nd :- not d.";

        let found = answer_sets_of(program, Config::default());
        assert_eq!(found.len(), 16);

        let distinct = found.iter().collect::<BTreeSet<_>>();
        assert_eq!(distinct.len(), 16);

        assert_eq!(found, stable_models(program));
    }

    #[test]
    fn choices_with_constraint() {
        let program = "
            a :- not na. na :- not a.
            b :- not nb. nb :- not b.
            c :- not nc. nc :- not c.
            :- a, b.";

        let found = answer_sets_of(program, Config::default());
        assert_eq!(found.len(), 6);
        assert_eq!(found, stable_models(program));
    }

    #[test]
    fn required_atom() {
        let program = "
            a :- not na. na :- not a.
            b :- not nb. nb :- not b.
            c :- a.
            c :- b.
            :- not c.";

        let found = answer_sets_of(program, Config::default());
        assert_eq!(found.len(), 3);
        assert!(found.iter().all(|answer_set| answer_set.contains(&"c".to_string())));
        assert_eq!(found, stable_models(program));
    }

    #[test]
    fn positive_loop() {
        let program = "
            a :- not na. na :- not a.
            p :- q.
            q :- p.
            p :- a.
            :- not p.";

        let found = answer_sets_of(program, Config::default());
        assert_eq!(found, vec![vec!["a", "p", "q"]]);
        assert_eq!(found, stable_models(program));
    }

    #[test]
    fn derived_choice() {
        let program = "
            a :- not b.
            b :- not a.
            c :- a.
            d :- c.
            d :- b.
            e :- d, not f.
            f :- not e.";

        let found = answer_sets_of(program, Config::default());
        assert_eq!(found.len(), 4);
        assert_eq!(found, stable_models(program));
    }

    #[test]
    fn odd_cycle_through_choice() {
        let program = "
            a :- not b.
            b :- not a.
            c :- not c, a.";

        let found = answer_sets_of(program, Config::default());
        assert_eq!(found, stable_models(program));
        assert_eq!(found, vec![vec!["b"]]);
    }

    #[test]
    fn enumeration_is_repeatable() {
        let program = "
            a :- not na. na :- not a.
            b :- not nb. nb :- not b.
            :- not a, not b.";

        let mut config = Config::default();
        config.random_decision_bias.value = 0.5;
        config.seed.value = 7;

        let first = answer_sets_of(program, config.clone());
        let second = answer_sets_of(program, config);
        assert_eq!(first, second);
        assert_eq!(first, stable_models(program));
    }
}
