//! Phase conversion.
//!
//! Each compiler phase hands the next one the same tree shape with different
//! slot types. A phase implements [`Rewrite`] with one hook per slot and calls
//! [`Expr::rewrite`]; the traversal itself lives here, so no phase has to
//! repeat the structural recursion.
//!
//! Hooks run in pre-order: a node's annotation is converted before its
//! children, and children left to right.
//!
//! [`ExprKind`] tears itself down iteratively, so its fields cannot be moved
//! out by pattern. The traversal takes each child out of its slot instead,
//! cloning annotations, variables and types on the way.

use std::mem::take;

use super::{Annotated, Def, Expr, ExprKind, Pattern, PortImpl};
use crate::stack::ensure_sufficient_stack;

/// Slot conversions for one phase boundary.
pub trait Rewrite<A, D, V, T> {
    type Ann;
    type Def;
    type Var;
    type Ty;

    fn annotation(&mut self, annotation: A) -> Self::Ann;

    /// Convert a `let` definition. Implementations over [`Def`] usually
    /// delegate to [`Def::rewrite`].
    fn definition(&mut self, def: D) -> Self::Def;

    fn variable(&mut self, var: V) -> Self::Var;

    fn ty(&mut self, ty: T) -> Self::Ty;
}

/// Result of rewriting an `Expr<A, D, V, T>` with `R`.
pub type Rewritten<R, A, D, V, T> = Expr<
    <R as Rewrite<A, D, V, T>>::Ann,
    <R as Rewrite<A, D, V, T>>::Def,
    <R as Rewrite<A, D, V, T>>::Var,
    <R as Rewrite<A, D, V, T>>::Ty,
>;

impl<A: Clone, D, V: Clone, T: Clone> Annotated<A, ExprKind<A, D, V, T>> {
    /// Convert every slot of this tree with `rewriter`.
    pub fn rewrite<R>(self, rewriter: &mut R) -> Rewritten<R, A, D, V, T>
    where
        R: Rewrite<A, D, V, T> + ?Sized,
    {
        ensure_sufficient_stack(|| {
            let annotation = rewriter.annotation(self.annotation);
            Annotated::new(annotation, rewrite_kind(self.node, rewriter))
        })
    }
}

impl<A: Clone, V: Clone, T: Clone> Def<A, V, T> {
    /// Convert a definition with a rewriter whose definition slot is [`Def`].
    pub fn rewrite<R, B, W, U>(self, rewriter: &mut R) -> Def<B, W, U>
    where
        R: Rewrite<A, Def<A, V, T>, V, T, Ann = B, Def = Def<B, W, U>, Var = W, Ty = U> + ?Sized,
    {
        let pattern = self.pattern.map_vars(&mut |var| rewriter.variable(var));
        let body = self.body.rewrite(rewriter);
        let annotation = self.annotation.map(|ty| rewriter.ty(ty));
        Def {
            pattern,
            body,
            annotation,
        }
    }
}

/// Rewrite a boxed child. The child's node is moved out and its annotation
/// cloned; the emptied shell is dropped with the parent.
fn rewrite_box<R, A, D, V, T>(
    expr: &mut Expr<A, D, V, T>,
    rewriter: &mut R,
) -> Box<Rewritten<R, A, D, V, T>>
where
    A: Clone,
    V: Clone,
    T: Clone,
    R: Rewrite<A, D, V, T> + ?Sized,
{
    let child = Annotated::new(expr.annotation.clone(), expr.node.take());
    Box::new(child.rewrite(rewriter))
}

fn rewrite_all<R, A, D, V, T>(
    exprs: &mut Vec<Expr<A, D, V, T>>,
    rewriter: &mut R,
) -> Vec<Rewritten<R, A, D, V, T>>
where
    A: Clone,
    V: Clone,
    T: Clone,
    R: Rewrite<A, D, V, T> + ?Sized,
{
    take(exprs)
        .into_iter()
        .map(|expr| expr.rewrite(rewriter))
        .collect()
}

fn rewrite_fields<R, A, D, V, T>(
    fields: &mut Vec<(String, Expr<A, D, V, T>)>,
    rewriter: &mut R,
) -> Vec<(String, Rewritten<R, A, D, V, T>)>
where
    A: Clone,
    V: Clone,
    T: Clone,
    R: Rewrite<A, D, V, T> + ?Sized,
{
    take(fields)
        .into_iter()
        .map(|(field, expr)| (field, expr.rewrite(rewriter)))
        .collect()
}

fn rewrite_kind<R, A, D, V, T>(
    mut kind: ExprKind<A, D, V, T>,
    rewriter: &mut R,
) -> ExprKind<R::Ann, R::Def, R::Var, R::Ty>
where
    A: Clone,
    V: Clone,
    T: Clone,
    R: Rewrite<A, D, V, T> + ?Sized,
{
    match &mut kind {
        ExprKind::Literal(lit) => ExprKind::Literal(lit.clone()),
        ExprKind::Var(var) => ExprKind::Var(rewriter.variable(var.clone())),
        ExprKind::Range { low, high } => {
            let low = rewrite_box(low, rewriter);
            let high = rewrite_box(high, rewriter);
            ExprKind::Range { low, high }
        }
        ExprKind::ExplicitList(items) => ExprKind::ExplicitList(rewrite_all(items, rewriter)),
        ExprKind::Binop { op, left, right } => {
            let op = rewriter.variable(op.clone());
            let left = rewrite_box(left, rewriter);
            let right = rewrite_box(right, rewriter);
            ExprKind::Binop { op, left, right }
        }
        ExprKind::Lambda { param, body } => {
            let param = take_pattern(param).map_vars(&mut |var| rewriter.variable(var));
            let body = rewrite_box(body, rewriter);
            ExprKind::Lambda { param, body }
        }
        ExprKind::App { func, arg } => {
            let func = rewrite_box(func, rewriter);
            let arg = rewrite_box(arg, rewriter);
            ExprKind::App { func, arg }
        }
        ExprKind::MultiIf(branches) => {
            let branches = take(branches);
            let mut out = Vec::with_capacity(branches.len());
            for (cond, branch) in branches {
                let cond = cond.rewrite(rewriter);
                let branch = branch.rewrite(rewriter);
                out.push((cond, branch));
            }
            ExprKind::MultiIf(out)
        }
        ExprKind::Let { defs, body } => {
            let defs = take(defs)
                .into_iter()
                .map(|def| rewriter.definition(def))
                .collect();
            let body = rewrite_box(body, rewriter);
            ExprKind::Let { defs, body }
        }
        ExprKind::Case {
            scrutinee,
            branches,
        } => {
            let scrutinee = rewrite_box(scrutinee, rewriter);
            let branches = take(branches);
            let mut out = Vec::with_capacity(branches.len());
            for (pattern, branch) in branches {
                let pattern = pattern.map_vars(&mut |var| rewriter.variable(var));
                let branch = branch.rewrite(rewriter);
                out.push((pattern, branch));
            }
            ExprKind::Case {
                scrutinee,
                branches: out,
            }
        }
        ExprKind::Data { ctor, args } => ExprKind::Data {
            ctor: take(ctor),
            args: rewrite_all(args, rewriter),
        },
        ExprKind::Access { record, field } => ExprKind::Access {
            record: rewrite_box(record, rewriter),
            field: take(field),
        },
        ExprKind::Remove { record, field } => ExprKind::Remove {
            record: rewrite_box(record, rewriter),
            field: take(field),
        },
        ExprKind::Insert {
            record,
            field,
            value,
        } => {
            let record = rewrite_box(record, rewriter);
            let value = rewrite_box(value, rewriter);
            ExprKind::Insert {
                record,
                field: take(field),
                value,
            }
        }
        ExprKind::Modify { record, fields } => {
            let record = rewrite_box(record, rewriter);
            let fields = rewrite_fields(fields, rewriter);
            ExprKind::Modify { record, fields }
        }
        ExprKind::Record(fields) => ExprKind::Record(rewrite_fields(fields, rewriter)),
        ExprKind::Port(port) => ExprKind::Port(match port {
            PortImpl::In { name, ty } => PortImpl::In {
                name: take(name),
                ty: rewriter.ty(ty.clone()),
            },
            PortImpl::Out { name, expr, ty } => {
                let expr = rewrite_box(expr, rewriter);
                PortImpl::Out {
                    name: take(name),
                    expr,
                    ty: rewriter.ty(ty.clone()),
                }
            }
            PortImpl::Task { name, expr, ty } => {
                let expr = rewrite_box(expr, rewriter);
                PortImpl::Task {
                    name: take(name),
                    expr,
                    ty: rewriter.ty(ty.clone()),
                }
            }
        }),
        ExprKind::Shader { uid, source } => ExprKind::Shader {
            uid: take(uid),
            source: take(source),
        },
    }
}

fn take_pattern<V>(pattern: &mut Pattern<V>) -> Pattern<V> {
    std::mem::replace(pattern, Pattern::Anything)
}
