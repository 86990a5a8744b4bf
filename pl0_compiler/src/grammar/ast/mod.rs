//! Abstract syntax tree produced by the parser

pub mod nodes;

pub use nodes::{
    Block, Condition, ConstDef, Expression, Number, Procedure, Program, RelOp, Statement,
};
