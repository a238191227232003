//! Builder scenario tests
//!
//! Covers the structural invariants of constructed graphs and the
//! documented shapes for each control construct.

use cfg_ir::{
    build_flow_graph, BlockId, BlockKind, CfgError, EdgeKind, Expr, Stmt,
};
use pretty_assertions::assert_eq;

fn expr(text: &str) -> Stmt {
    Stmt::Expr(Expr::Raw(text.to_string()))
}

fn ident(name: &str) -> Expr {
    Expr::Ident(name.to_string())
}

fn successors(cfg: &cfg_ir::Cfg, id: u32) -> Vec<(EdgeKind, BlockId)> {
    cfg.block(BlockId::from(id))
        .unwrap()
        .successors
        .iter()
        .map(|e| (e.kind, e.target))
        .collect()
}

/// Structural invariants every finished graph must satisfy.
fn assert_graph_invariants(cfg: &cfg_ir::Cfg) {
    assert!(
        cfg.block(cfg.exit).unwrap().successors.is_empty(),
        "exit must have no outgoing edges"
    );
    assert!(
        cfg.block(cfg.entry).unwrap().predecessors.is_empty(),
        "entry must have no incoming edges"
    );
    for block in cfg.blocks() {
        if block.kind == BlockKind::Condition {
            let trues = block
                .successors
                .iter()
                .filter(|e| e.kind == EdgeKind::TrueBranch)
                .count();
            let falses = block
                .successors
                .iter()
                .filter(|e| e.kind == EdgeKind::FalseBranch)
                .count();
            assert_eq!(trues, 1, "condition block {} true-branch arity", block.id);
            assert_eq!(falses, 1, "condition block {} false-branch arity", block.id);
        }
    }
}

#[test]
fn test_empty_program_connects_entry_to_exit() {
    let cfg = build_flow_graph(&[]).unwrap();

    // entry(0), exit(1), first(2)
    assert_eq!(cfg.block_count(), 3);
    assert_eq!(successors(&cfg, 0), vec![(EdgeKind::Unconditional, BlockId::from(2))]);
    assert_eq!(successors(&cfg, 2), vec![(EdgeKind::Unconditional, cfg.exit)]);
    assert_graph_invariants(&cfg);
}

#[test]
fn test_if_without_else_models_the_skipped_arm() {
    // if (x) { return; }
    let cfg = build_flow_graph(&[Stmt::If {
        test: ident("x"),
        consequent: Box::new(Stmt::Block(vec![Stmt::Return(None)])),
        alternate: None,
    }])
    .unwrap();

    // entry(0), exit(1), first(2), cond(3), then(4), after(5), dead(6)
    let cond = cfg.block(BlockId::from(3)).unwrap();
    assert_eq!(cond.kind, BlockKind::Condition);
    assert_eq!(cond.condition, Some(ident("x")));

    // true branch enters the then-arm; the return routes it to exit
    assert_eq!(cond.success_exit(), Some(BlockId::from(4)));
    assert_eq!(successors(&cfg, 4), vec![(EdgeKind::Unconditional, cfg.exit)]);

    // false branch skips to the join, which falls through to exit
    assert_eq!(cond.false_exit(), Some(BlockId::from(5)));
    assert_eq!(successors(&cfg, 5), vec![(EdgeKind::Unconditional, cfg.exit)]);

    assert_graph_invariants(&cfg);
}

#[test]
fn test_if_else_both_arms_join() {
    let cfg = build_flow_graph(&[
        Stmt::If {
            test: ident("x"),
            consequent: Box::new(expr("a")),
            alternate: Some(Box::new(expr("b"))),
        },
        expr("c"),
    ])
    .unwrap();

    // entry(0), exit(1), first(2), cond(3), then(4), else(5), after(6)
    assert_eq!(successors(&cfg, 4), vec![(EdgeKind::Unconditional, BlockId::from(6))]);
    assert_eq!(successors(&cfg, 5), vec![(EdgeKind::Unconditional, BlockId::from(6))]);
    let after = cfg.block(BlockId::from(6)).unwrap();
    assert_eq!(after.statements, vec![expr("c")]);
    assert_graph_invariants(&cfg);
}

#[test]
fn test_while_continue_adds_direct_body_to_condition_edge() {
    // while (x) { continue; }
    let cfg = build_flow_graph(&[Stmt::While {
        test: ident("x"),
        body: Box::new(Stmt::Block(vec![Stmt::Continue])),
    }])
    .unwrap();

    // entry(0), exit(1), first(2), cond(3), body(4), after(5), dead(6)
    let cond_id = BlockId::from(3);

    // continue resolves to the while's own condition block
    assert_eq!(successors(&cfg, 4), vec![(EdgeKind::Unconditional, cond_id)]);
    assert_eq!(
        cfg.block(BlockId::from(4)).unwrap().statements,
        vec![Stmt::Continue]
    );

    // the post-body fallthrough comes from the dead continuation block, a
    // distinct source targeting the same condition
    assert_eq!(successors(&cfg, 6), vec![(EdgeKind::Unconditional, cond_id)]);
    assert_eq!(
        cfg.block(cond_id).unwrap().predecessors,
        vec![BlockId::from(2), BlockId::from(4), BlockId::from(6)]
    );
    assert_graph_invariants(&cfg);
}

#[test]
fn test_inner_break_resolves_to_inner_loop_after_block() {
    // for (a) { for (b) { break; } }
    let cfg = build_flow_graph(&[Stmt::For {
        init: None,
        test: Some(ident("a")),
        update: None,
        body: Box::new(Stmt::For {
            init: None,
            test: Some(ident("b")),
            update: None,
            body: Box::new(Stmt::Break),
        }),
    }])
    .unwrap();

    // entry(0), exit(1), first(2),
    // outer: cond(3), body(4), after(5)
    // inner: cond(6), body(7), after(8), dead(9)
    let inner_after = BlockId::from(8);
    let outer_after = BlockId::from(5);

    assert_eq!(successors(&cfg, 7), vec![(EdgeKind::Unconditional, inner_after)]);
    assert_ne!(
        cfg.block(BlockId::from(7)).unwrap().success_exit(),
        Some(outer_after),
        "break must not escape to the outer loop"
    );

    // the inner loop's after-block falls through back to the outer test
    assert_eq!(successors(&cfg, 8), vec![(EdgeKind::Unconditional, BlockId::from(3))]);
    assert_graph_invariants(&cfg);
}

#[test]
fn test_inner_continue_resolves_to_inner_update_block() {
    // for (;a;u) { for (;b;v) { continue; } }
    let cfg = build_flow_graph(&[Stmt::For {
        init: None,
        test: Some(ident("a")),
        update: Some(Expr::Raw("u".to_string())),
        body: Box::new(Stmt::For {
            init: None,
            test: Some(ident("b")),
            update: Some(Expr::Raw("v".to_string())),
            body: Box::new(Stmt::Continue),
        }),
    }])
    .unwrap();

    // entry(0), exit(1), first(2),
    // outer: cond(3), body(4), after(5), update(6)
    // inner: cond(7), body(8), after(9), update(10), dead(11)
    let inner_update = cfg.block(BlockId::from(10)).unwrap();
    assert_eq!(
        inner_update.statements,
        vec![Stmt::Expr(Expr::Raw("v".to_string()))]
    );
    assert_eq!(successors(&cfg, 8), vec![(EdgeKind::Unconditional, BlockId::from(10))]);
    assert_eq!(successors(&cfg, 10), vec![(EdgeKind::Unconditional, BlockId::from(7))]);
    assert_graph_invariants(&cfg);
}

#[test]
fn test_return_leaves_dead_code_disconnected() {
    let cfg = build_flow_graph(&[Stmt::Return(None), expr("dead")]).unwrap();

    // entry(0), exit(1), first(2), dead(3)
    let dead = cfg.block(BlockId::from(3)).unwrap();
    assert!(dead.predecessors.is_empty(), "dead code stays unreachable");
    assert_eq!(dead.statements, vec![expr("dead")]);
    // the post-pass still gives the dangling block somewhere to go
    assert_eq!(successors(&cfg, 3), vec![(EdgeKind::Unconditional, cfg.exit)]);
    assert_graph_invariants(&cfg);
}

#[test]
fn test_break_outside_loop_is_a_build_error() {
    assert!(matches!(
        build_flow_graph(&[Stmt::Break]),
        Err(CfgError::BreakOutsideLoop)
    ));
    assert!(matches!(
        build_flow_graph(&[Stmt::Continue]),
        Err(CfgError::ContinueOutsideLoop)
    ));
    // a break after the loop has closed is just as illegal
    assert!(matches!(
        build_flow_graph(&[
            Stmt::While {
                test: ident("x"),
                body: Box::new(expr("a")),
            },
            Stmt::Break,
        ]),
        Err(CfgError::BreakOutsideLoop)
    ));
}

#[test]
fn test_every_live_block_has_an_outgoing_edge() {
    let cfg = build_flow_graph(&[
        expr("a"),
        Stmt::If {
            test: ident("x"),
            consequent: Box::new(Stmt::While {
                test: ident("y"),
                body: Box::new(Stmt::Break),
            }),
            alternate: None,
        },
        Stmt::Return(None),
    ])
    .unwrap();

    for block in cfg.blocks() {
        let live = block.id == cfg.entry || !block.predecessors.is_empty();
        if live && block.id != cfg.exit {
            assert!(
                !block.successors.is_empty(),
                "live block {} is dangling",
                block.id
            );
        }
    }
    assert_graph_invariants(&cfg);
}
