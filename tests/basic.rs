use otter_asp::{
    builder::NoGoodOk,
    config::Config,
    context::{Context, ContextState},
    reports::Report,
    structures::{
        atom::AtomKind,
        nogood::{NoGood, NoGoodKind},
        truth::Truth,
    },
    types::err::{BuildError, ErrorKind},
};

mod basic {
    use super::*;

    #[test]
    fn one_fact() {
        let mut the_context = Context::from_config(Config::default());
        let store = the_context.read_program("p.".as_bytes()).unwrap();

        let answer_set = the_context.next_answer_set().unwrap().unwrap();
        assert_eq!(store.names_of(&answer_set), vec!["p"]);
        assert_eq!(the_context.next_answer_set(), Ok(None));
        assert_eq!(the_context.state, ContextState::Exhausted);
        assert_eq!(the_context.report(), Report::Satisfiable);
    }

    #[test]
    fn empty_program() {
        let mut the_context = Context::from_config(Config::default());
        the_context.read_program("".as_bytes()).unwrap();

        let answer_sets = the_context.answer_sets().collect::<Vec<_>>();
        assert_eq!(answer_sets.len(), 1);
        assert!(answer_sets[0].as_ref().unwrap().is_empty());
    }

    #[test]
    fn violated_constraint() {
        let mut the_context = Context::from_config(Config::default());
        the_context.read_program("p. q :- p. :- q.".as_bytes()).unwrap();

        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(the_context.state, ContextState::Unsatisfiable);
    }

    #[test]
    fn unsupported_atom() {
        let mut the_context = Context::from_config(Config::default());
        the_context.read_program(":- not p.".as_bytes()).unwrap();

        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn tautology() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.register_atom(1, AtomKind::Basic, false).is_ok());

        assert_eq!(
            the_context.add_nogood(NoGood::new([1, -1], NoGoodKind::Static)),
            Ok(NoGoodOk::Tautology)
        );
        assert_eq!(the_context.nogood_db.original_count(), 0);
    }

    #[test]
    fn unregistered_atom() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.register_atom(1, AtomKind::Basic, false).is_ok());

        assert_eq!(
            the_context.add_nogood(NoGood::new([1, 2], NoGoodKind::Static)),
            Err(ErrorKind::Build(BuildError::UnregisteredAtom(2)))
        );
    }

    #[test]
    fn unit_nogood() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.register_atom(1, AtomKind::Basic, false).is_ok());

        assert!(matches!(
            the_context.add_nogood(NoGood::new([1], NoGoodKind::Static)),
            Ok(NoGoodOk::Added(_))
        ));
        assert_eq!(the_context.value_of(1), Some(Truth::False));

        assert_eq!(
            the_context.add_nogood(NoGood::new([-1], NoGoodKind::Static)),
            Ok(NoGoodOk::Unsatisfiable)
        );
        assert_eq!(the_context.report(), Report::Unsatisfiable);
    }
}

mod statistics {
    use super::*;

    #[test]
    fn conflict_after_closing() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.register_atom(1, AtomKind::Basic, false).is_ok());
        assert!(the_context.register_atom(2, AtomKind::Basic, false).is_ok());
        assert!(the_context.add_nogood(NoGood::new([-1, -2], NoGoodKind::Static)).is_ok());

        // With no choice atoms, both atoms are closed to false and the nogood is violated.
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));

        let statistics = the_context.statistics();
        assert_eq!(statistics.conflicts_after_closing, 1);
        assert_eq!(statistics.choices, 0);
        assert_eq!(statistics.backjumps, 0);
    }

    #[test]
    fn choices_without_closing_conflicts() {
        let mut the_context = Context::from_config(Config::default());
        the_context.read_program("a :- not b. b :- not a.".as_bytes()).unwrap();

        assert_eq!(the_context.answer_sets().count(), 2);
        let statistics = the_context.statistics();
        assert!(statistics.choices >= 1);
        assert_eq!(statistics.conflicts_after_closing, 0);
    }
}
