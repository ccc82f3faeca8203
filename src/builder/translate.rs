/*!
The translation of a ground normal program into nogoods.

Each distinct rule body *β* is given an atom, and the following nogoods relate the body atom to the atoms of the body:

| Nogood                         | Reading                                          |
|--------------------------------|--------------------------------------------------|
| `{-β, +p1, …, -n1, …}`, head `-β` | if the body holds, so does the body atom       |
| `{+β, -p}`, each positive `p`     | if the body atom holds, `p` holds               |
| `{+β, +n}`, each negative `n`     | if the body atom holds, `n` is false            |

Each rule `h :- β` then contributes the nogood `{-h, +β}` with head `-h`, so `h` is true whenever `β` is (strongly) derived.
In the other direction, each atom `h` which is not a fact is supported by the nogood `{+h, -β1, …, -βk}` over the bodies of the rules with head `h`, and an atom with no rule is false.

Facts are asserted by the nogood `{-a}` with head `-a`, and a constraint `:- β` is the nogood over the literals of `β`.

A body with some negative literal is a choice point, as only such bodies may be decided on.

# Order

Nogoods are placed in the batch with facts last.
As nogoods are [added](crate::context::GenericContext::add_nogood) without propagation, only consequences of single nogoods are assigned when a batch is ingested.
*/

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::{
    builder::{
        grounder::{GroundAtom, GroundBatch, GroundBody},
        program::Rule,
        AtomStore,
    },
    db::atom::Body,
    structures::{
        atom::{Atom, AtomKind},
        literal::{CLiteral, Literal},
        nogood::{NoGood, NoGoodKind},
    },
    types::err::ErrorKind,
};

/// Translates rules to a batch, with atoms issued by the store.
pub fn translate(rules: &[Rule], store: &mut AtomStore) -> Result<GroundBatch, ErrorKind> {
    let mut batch = GroundBatch::default();

    let mut named = BTreeSet::default();
    for rule in rules {
        for name in rule.head.iter().chain(&rule.positive).chain(&rule.negative) {
            named.insert(store.atom(name));
        }
    }
    for atom in &named {
        batch.atoms.push(GroundAtom {
            atom: *atom,
            kind: AtomKind::Basic,
            choice: false,
        });
    }

    let mut body_atoms: HashMap<(Vec<Atom>, Vec<Atom>), Atom> = HashMap::default();
    let mut supports: BTreeMap<Atom, Vec<Atom>> = BTreeMap::default();
    let mut facts = BTreeSet::default();
    let mut constraints = Vec::default();

    for rule in rules {
        let positive = sorted_atoms(&rule.positive, store);
        let negative = sorted_atoms(&rule.negative, store);

        let head = match rule.head.as_deref() {
            Some(name) => store.atom(name),
            None => {
                let literals = positive
                    .iter()
                    .map(|atom| CLiteral::new(*atom, true))
                    .chain(negative.iter().map(|atom| CLiteral::new(*atom, false)));
                constraints.push(NoGood::new(literals, NoGoodKind::Static));
                continue;
            }
        };

        if rule.is_fact() {
            facts.insert(head);
            continue;
        }

        let body = (positive, negative);
        let body_atom = match body_atoms.get(&body) {
            Some(atom) => *atom,
            None => {
                let atom = store.fresh_body();
                let (positive, negative) = &body;
                batch.atoms.push(GroundAtom {
                    atom,
                    kind: AtomKind::RuleBody,
                    choice: !negative.is_empty(),
                });
                body_nogoods(atom, positive, negative, &mut batch.nogoods)?;
                body_atoms.insert(body.clone(), atom);
                atom
            }
        };

        let (positive, negative) = body;
        batch.bodies.push(GroundBody {
            atom: body_atom,
            head: Some(head),
            body: Body { positive, negative },
        });

        batch.nogoods.push(NoGood::headed(
            CLiteral::new(head, false),
            [CLiteral::new(body_atom, true)],
            NoGoodKind::Static,
        )?);

        let bodies = supports.entry(head).or_default();
        if !bodies.contains(&body_atom) {
            bodies.push(body_atom);
        }
    }

    batch.nogoods.append(&mut constraints);

    for atom in &named {
        if facts.contains(atom) {
            continue;
        }
        let support = supports
            .get(atom)
            .into_iter()
            .flatten()
            .map(|body_atom| CLiteral::new(*body_atom, false));
        let literals = std::iter::once(CLiteral::new(*atom, true)).chain(support);
        batch.nogoods.push(NoGood::new(literals, NoGoodKind::Support));
    }

    for fact in facts {
        batch.facts.push(fact);
        batch
            .nogoods
            .push(NoGood::headed(CLiteral::new(fact, false), [], NoGoodKind::Static)?);
    }

    Ok(batch)
}

fn sorted_atoms(names: &[String], store: &mut AtomStore) -> Vec<Atom> {
    let mut atoms = names.iter().map(|name| store.atom(name)).collect::<Vec<_>>();
    atoms.sort_unstable();
    atoms.dedup();
    atoms
}

/// Pushes the nogoods relating a body atom to the atoms of the body.
fn body_nogoods(
    body_atom: Atom,
    positive: &[Atom],
    negative: &[Atom],
    nogoods: &mut Vec<NoGood>,
) -> Result<(), ErrorKind> {
    let body_literals = positive
        .iter()
        .map(|atom| CLiteral::new(*atom, true))
        .chain(negative.iter().map(|atom| CLiteral::new(*atom, false)));
    nogoods.push(NoGood::headed(
        CLiteral::new(body_atom, false),
        body_literals,
        NoGoodKind::Static,
    )?);

    let body = CLiteral::new(body_atom, true);
    for atom in positive {
        nogoods.push(NoGood::new([body, CLiteral::new(*atom, false)], NoGoodKind::Static));
    }
    for atom in negative {
        nogoods.push(NoGood::new([body, CLiteral::new(*atom, true)], NoGoodKind::Static));
    }
    Ok(())
}
