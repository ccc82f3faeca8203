use otter_asp::{
    config::Config,
    context::{Context, ContextState},
    procedures::justification::JustificationResult,
    reports::Report,
    structures::{
        atom::AtomKind,
        literal::{CLiteral, Literal},
        nogood::{NoGood, NoGoodKind},
        truth::Truth,
    },
};

mod scenarios {
    use super::*;

    #[test]
    fn derived_from_fact() {
        let mut the_context = Context::from_config(Config::default());
        let store = the_context.read_program("p(a). b :- p(a).".as_bytes()).unwrap();

        let answer_sets = the_context
            .answer_sets()
            .map(|answer_set| {
                let mut names = store.names_of(&answer_set.unwrap()).into_iter().map(String::from).collect::<Vec<_>>();
                names.sort();
                names
            })
            .collect::<Vec<_>>();

        assert_eq!(answer_sets, vec![vec!["b".to_string(), "p(a)".to_string()]]);
        assert_eq!(the_context.state, ContextState::Exhausted);
    }

    #[test]
    fn even_negative_cycle() {
        let mut the_context = Context::from_config(Config::default());
        let store = the_context.read_program("a :- not b. b :- not a.".as_bytes()).unwrap();

        let mut answer_sets = the_context
            .answer_sets()
            .map(|answer_set| store.names_of(&answer_set.unwrap()).join(" "))
            .collect::<Vec<_>>();
        answer_sets.sort();

        assert_eq!(answer_sets, vec!["a", "b"]);
        assert_eq!(the_context.report(), Report::Satisfiable);
    }

    #[test]
    fn unfounded_loop() {
        let program = "
            r :- not nr.
            nr :- not r.
            q(5) :- r.
            p(5) :- q(5).
            q(5) :- p(5).
            :- not p(5).";

        let mut the_context = Context::from_config(Config::default());
        let store = the_context.read_program(program.as_bytes()).unwrap();
        let nr = store.id_of("nr").unwrap();
        let p5 = store.id_of("p(5)").unwrap();

        assert!(the_context.propagate().is_ok());
        the_context.assignment.choose(nr, Truth::True);
        assert!(the_context.propagate().is_ok());
        the_context.close();
        assert!(the_context.propagate().is_ok());

        match the_context.justify(p5) {
            Ok(JustificationResult::Unfounded(nogood)) => {
                assert!(!nogood.literals().is_empty());
                assert!(nogood.literals().contains(&CLiteral::new(p5, true)));
            }
            otherwise => panic!("Unexpected justification: {otherwise:?}"),
        }
    }

    #[test]
    fn unfounded_loop_answer_sets() {
        let program = "
            r :- not nr.
            nr :- not r.
            q(5) :- r.
            p(5) :- q(5).
            q(5) :- p(5).
            :- not p(5).";

        let mut the_context = Context::from_config(Config::default());
        let store = the_context.read_program(program.as_bytes()).unwrap();

        let answer_sets = the_context
            .answer_sets()
            .map(|answer_set| {
                let mut names = store.names_of(&answer_set.unwrap()).into_iter().map(String::from).collect::<Vec<_>>();
                names.sort();
                names
            })
            .collect::<Vec<_>>();

        assert_eq!(answer_sets, vec![vec!["p(5)", "q(5)", "r"]]);
    }

    #[test]
    fn odd_negative_cycle() {
        let mut the_context = Context::from_config(Config::default());
        the_context.read_program("a :- not a.".as_bytes()).unwrap();

        assert_eq!(the_context.answer_sets().count(), 0);
        assert_eq!(the_context.report(), Report::Unsatisfiable);
    }

    #[test]
    fn binary_propagation() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.register_atom(1, AtomKind::Basic, false).is_ok());
        assert!(the_context.register_atom(2, AtomKind::Basic, false).is_ok());
        assert!(the_context.add_nogood(NoGood::new([1, 2], NoGoodKind::Static)).is_ok());

        the_context.assignment.choose(1, Truth::True);
        assert_eq!(the_context.assignment.level(), 1);
        assert!(the_context.propagate().is_ok());

        assert_eq!(the_context.value_of(2), Some(Truth::False));
        assert_eq!(the_context.assignment.weak_level(2), Some(1));
    }
}
