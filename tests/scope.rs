use sprig::{
    ast::{Expr, Name},
    interpreter::{
        evaluator::{core::Context, scope::ScopeArena},
        value::core::Value,
    },
    parse,
};

#[test]
fn lookup_walks_to_the_root() {
    let mut arena = ScopeArena::new();
    let root = arena.allocate(None);
    let child = arena.allocate(Some(root));
    let grandchild = arena.allocate(Some(child));

    arena.define(root, Name::simple("x"), Value::Integer(1));

    assert_eq!(arena.lookup(grandchild, &Name::simple("x")), Some(&Value::Integer(1)));
    assert_eq!(arena.get_local(grandchild, &Name::simple("x")), None);
    assert_eq!(arena.lookup(root, &Name::simple("y")), None);
    assert_eq!(arena.parent(root), None);
    assert_eq!(arena.len(), 3);
}

#[test]
fn define_shadows_without_touching_ancestors() {
    let mut arena = ScopeArena::new();
    let root = arena.allocate(None);
    let child = arena.allocate(Some(root));
    let x = Name::simple("x");

    arena.define(root, x.clone(), Value::Integer(1));
    arena.define(child, x.clone(), Value::Integer(2));

    assert_eq!(arena.lookup(child, &x), Some(&Value::Integer(2)));
    assert_eq!(arena.lookup(root, &x), Some(&Value::Integer(1)));
}

#[test]
fn assign_overwrites_the_nearest_owner() {
    let mut arena = ScopeArena::new();
    let root = arena.allocate(None);
    let middle = arena.allocate(Some(root));
    let leaf = arena.allocate(Some(middle));
    let x = Name::simple("x");

    arena.define(root, x.clone(), Value::Integer(1));
    arena.define(middle, x.clone(), Value::Integer(2));
    arena.assign(leaf, x.clone(), Value::Integer(3));

    assert_eq!(arena.resolve_owner(leaf, &x), Some(middle));
    assert_eq!(arena.get_local(middle, &x), Some(&Value::Integer(3)));
    assert_eq!(arena.get_local(root, &x), Some(&Value::Integer(1)));
    assert_eq!(arena.get_local(leaf, &x), None);
}

#[test]
fn assign_creates_in_the_current_frame() {
    let mut arena = ScopeArena::new();
    let root = arena.allocate(None);
    let child = arena.allocate(Some(root));
    let y = Name::simple("y");

    arena.assign(child, y.clone(), Value::from("new"));

    assert_eq!(arena.resolve_owner(child, &y), Some(child));
    assert_eq!(arena.lookup(root, &y), None);
}

#[test]
fn reparent_changes_what_is_visible() {
    let mut arena = ScopeArena::new();
    let root = arena.allocate(None);
    let left = arena.allocate(Some(root));
    let right = arena.allocate(Some(root));
    let frame = arena.allocate(Some(left));
    let z = Name::simple("z");

    arena.define(left, z.clone(), Value::Integer(1));
    assert!(arena.lookup(frame, &z).is_some());

    arena.reparent(frame, right);
    assert_eq!(arena.parent(frame), Some(right));
    assert!(arena.lookup(frame, &z).is_none());
}

#[test]
fn root_holds_every_builtin() {
    let context = Context::with_output(Vec::new());
    let scopes = context.scopes();

    for name in [Name::simple("print"),
                 Name::simple("add"),
                 Name::simple("while"),
                 Name::simple("if"),
                 Name::compound("if", "else")]
    {
        assert!(matches!(scopes.get_local(context.root(), &name), Some(Value::Callable(_))),
                "missing builtin {name}");
    }
}

#[test]
fn block_frames_persist_between_evaluations() {
    let program = parse("{ x = 1; }").unwrap();
    let Expr::Block(block) = &program else {
        panic!("Expected a block, got {program:?}");
    };

    let mut context = Context::with_output(Vec::new());
    assert_eq!(context.block_frame(block), None);
    let frames_before = context.scopes().len();

    context.evaluate(&program).unwrap();
    let frame = context.block_frame(block).unwrap();
    assert_eq!(context.scopes().len(), frames_before + 1);
    assert_eq!(context.scopes().parent(frame), Some(context.root()));
    assert_eq!(context.scopes().get_local(frame, &Name::simple("x")), Some(&Value::Integer(1)));

    context.evaluate(&program).unwrap();
    assert_eq!(context.block_frame(block), Some(frame));
    assert_eq!(context.scopes().len(), frames_before + 1);
}

#[test]
fn one_program_runs_in_several_contexts() {
    let program = parse("{ x = 1; x; }").unwrap();
    let Expr::Block(block) = &program else {
        panic!("Expected a block, got {program:?}");
    };

    let mut first = Context::with_output(Vec::new());
    first.evaluate(&parse("{ 0; }").unwrap()).unwrap();
    assert_eq!(first.evaluate(&program).unwrap(), Value::Integer(1));

    let mut second = Context::with_output(Vec::new());
    assert_eq!(second.evaluate(&program).unwrap(), Value::Integer(1));
    assert_eq!(second.evaluate(&program).unwrap(), Value::Integer(1));

    let in_first = first.block_frame(block).unwrap();
    let in_second = second.block_frame(block).unwrap();
    assert_eq!(second.scopes().parent(in_second), Some(second.root()));
    assert_eq!(first.scopes().get_local(in_first, &Name::simple("x")), Some(&Value::Integer(1)));
}

#[test]
fn cloned_blocks_own_separate_frames() {
    let program = parse("{ n = 5; }").unwrap();
    let copy = program.clone();
    assert_eq!(copy, program);

    let (Expr::Block(original), Expr::Block(cloned)) = (&program, &copy) else {
        panic!("Expected blocks, got {program:?}");
    };
    assert_ne!(original.id(), cloned.id());

    let mut context = Context::with_output(Vec::new());
    context.evaluate(&program).unwrap();
    context.evaluate(&copy).unwrap();

    let frames = (context.block_frame(original).unwrap(), context.block_frame(cloned).unwrap());
    assert_ne!(frames.0, frames.1);
}
