use otter_asp::{
    config::{Config, RebootKind},
    context::{Context, ContextState},
    reboot::FixedIteration,
};

const PROGRAMS: [&str; 4] = [
    "a :- not na. na :- not a.
     b :- not nb. nb :- not b.
     c :- not nc. nc :- not c.
     :- a, b.
     :- not a, not c.",
    "a :- not na. na :- not a.
     b :- not nb. nb :- not b.
     c :- a.
     c :- b.
     :- not c.",
    "a :- not na. na :- not a.
     p :- q.
     q :- p.
     p :- a.
     :- not p.",
    "a :- not b.
     b :- not a.
     c :- a.
     d :- c.
     d :- b.
     e :- d, not f.
     f :- not e.",
];

const STRATEGIES: [RebootKind; 6] = [
    RebootKind::FixedIteration,
    RebootKind::FixedLearned,
    RebootKind::LubyLearned,
    RebootKind::DynamicLearned,
    RebootKind::AnswerSetFound,
    RebootKind::CompleteAssignment,
];

/// The answer sets of a program, as sorted lists of names, sorted.
fn answer_sets_of(program: &str, config: Config) -> Vec<Vec<String>> {
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

fn rebooting_config(strategy: RebootKind) -> Config {
    let mut config = Config::default();
    config.checks.value = true;
    config.reboot.value = true;
    config.reboot_strategy.value = strategy;
    config.reboot_interval.value = 1;
    config
}

mod reboot {
    use super::*;

    #[test]
    fn reboots_preserve_answer_sets() {
        for program in PROGRAMS {
            let expected = answer_sets_of(program, Config::default());

            for strategy in STRATEGIES {
                let found = answer_sets_of(program, rebooting_config(strategy));
                assert_eq!(found, expected, "{strategy} on {program}");
            }
        }
    }

    #[test]
    fn reboots_are_counted() {
        let mut the_context = Context::from_config(rebooting_config(RebootKind::AnswerSetFound));
        the_context.read_program(PROGRAMS[1].as_bytes()).unwrap();

        let count = the_context.answer_sets().count();
        assert_eq!(count, 3);
        assert!(the_context.counters.reboots <= count);
    }

    #[test]
    fn unsatisfiable_with_reboots() {
        let program = "
            a :- not na. na :- not a.
            b :- not nb. nb :- not b.
            :- a, b.
            :- na, nb.
            :- a, nb.
            :- na, b.";

        for strategy in STRATEGIES {
            let mut the_context = Context::from_config(rebooting_config(strategy));
            the_context.read_program(program.as_bytes()).unwrap();

            assert_eq!(the_context.answer_sets().count(), 0);
            assert_eq!(the_context.state, ContextState::Unsatisfiable);
        }
    }

    #[test]
    fn replaced_strategy() {
        let expected = answer_sets_of(PROGRAMS[0], Config::default());

        let mut config = Config::default();
        config.reboot.value = true;
        let mut the_context = Context::from_config(config);
        the_context.set_reboot_strategy(Box::new(FixedIteration::new(2)));
        let store = the_context.read_program(PROGRAMS[0].as_bytes()).unwrap();

        let mut found = the_context
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
        found.sort();

        assert_eq!(found, expected);
    }
}
