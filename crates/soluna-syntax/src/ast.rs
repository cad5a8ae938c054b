//! Parse tree definitions.
//! 解析树定义。
//!
//! The tree is one closed tagged union: every production is a `NodeKind`
//! variant and every node carries its span. Child spans nest within the
//! parent's span.
//! 解析树是一个封闭的带标签联合体：每个产生式对应一个 `NodeKind`
//! 变体，每个节点都携带自己的范围。子节点范围嵌套在父节点范围内。

use soluna_common::Span;

/// A node in the parse tree.
/// 解析树中的节点。
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNode {
    pub kind: NodeKind,
    pub span: Span,
}

impl ParseNode {
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Kind of parse tree node, one variant per production.
/// 解析树节点的类型，每个产生式一个变体。
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// The root: every top-level item in source order.
    /// 根节点：按源码顺序排列的所有顶层项。
    Program { items: Vec<ParseNode> },

    /// `type name ( params ) stmts mos` / 函数定义
    FuncDecl {
        return_type: Box<ParseNode>,
        name: Box<ParseNode>,
        params: Vec<ParseNode>,
        body: Box<ParseNode>,
    },
    /// A function parameter. / 函数参数。
    Param {
        data_type: Box<ParseNode>,
        name: Box<ParseNode>,
    },
    /// `[zeta] type a, b = e1, e2;` / 变量声明
    VarDecl {
        constant: bool,
        data_type: Box<ParseNode>,
        names: Vec<ParseNode>,
        values: Vec<ParseNode>,
    },
    /// `hubble type name = { elements };` / 表声明
    TableDecl {
        data_type: Box<ParseNode>,
        name: Box<ParseNode>,
        elements: Vec<ParseNode>,
    },
    /// `local <decl>` / 局部声明
    LocalDecl { decl: Box<ParseNode> },

    /// A statement sequence. / 语句序列。
    Block { stmts: Vec<ParseNode> },
    /// `sol cond stmts mos soluna ... luna ... mos` / 条件语句
    IfStatement {
        cond: Box<ParseNode>,
        then_block: Box<ParseNode>,
        elifs: Vec<ParseNode>,
        else_block: Option<Box<ParseNode>>,
    },
    /// One `soluna cond stmts mos` arm. / 一个 soluna 分支。
    ElseIf {
        cond: Box<ParseNode>,
        block: Box<ParseNode>,
    },
    /// `orbit cond cos stmts mos` / while 循环
    WhileLoop {
        cond: Box<ParseNode>,
        body: Box<ParseNode>,
    },
    /// `phase kai i = init, limit, step cos stmts mos` / for 循环
    ForLoop {
        var: Box<ParseNode>,
        init: Box<ParseNode>,
        limit: Box<ParseNode>,
        step: Box<ParseNode>,
        body: Box<ParseNode>,
    },
    /// `wax stmts wane cond` / repeat-until 循环
    RepeatUntil {
        body: Box<ParseNode>,
        cond: Box<ParseNode>,
    },
    /// `zara [expr];` / 返回语句
    ReturnStatement { value: Option<Box<ParseNode>> },
    /// `nova(expr);` or `lumen(expr);` / 输出语句
    Output {
        kind: OutputKind,
        arg: Box<ParseNode>,
    },
    /// `lumina()` / 输入表达式
    InputExpr,
    /// `leo name;` / goto 语句
    Goto { label: String },
    /// `::name::;` / 标签语句
    LabelStatement { name: String },
    /// `warp;` / break 语句
    Break,
    /// A lone `;`. / 单独的分号。
    EmptyStatement,

    /// `a, b op= e1, e2;` / 赋值语句
    Assignment {
        op: AssignOp,
        targets: Vec<ParseNode>,
        values: Vec<ParseNode>,
    },
    /// An expression in statement position. / 语句位置的表达式。
    ExpressionStatement { expr: Box<ParseNode> },

    /// `name(args)` / 函数调用
    FunctionCall {
        callee: Box<ParseNode>,
        args: Vec<ParseNode>,
    },
    /// `base[index]` / 表元素访问
    TableAccess {
        base: Box<ParseNode>,
        index: Box<ParseNode>,
    },
    /// A binary operation. / 二元运算。
    Binary {
        op: BinOp,
        lhs: Box<ParseNode>,
        rhs: Box<ParseNode>,
    },
    /// A prefix operation. / 前缀运算。
    Unary {
        op: UnaryOp,
        operand: Box<ParseNode>,
    },
    /// `x++` or `x--`. / 后缀运算。
    Postfix {
        op: PostfixOp,
        operand: Box<ParseNode>,
    },

    /// An identifier leaf carrying its lexeme. / 标识符叶节点。
    Ident { name: String },
    /// A literal leaf carrying its lexeme. / 字面量叶节点。
    Literal { kind: LitKind, text: String },
    /// A data type keyword leaf. / 数据类型关键字叶节点。
    DataType { name: String },
}

/// Binary operators, strongest last.
/// 二元运算符，优先级最低者在前。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Or,
    And,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Concat,
    Add,
    Sub,
    Mul,
    Div,
    IntDiv,
    Mod,
    Pow,
}

impl BinOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinOp::Or => "||",
            BinOp::And => "&&",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
            BinOp::Concat => "..",
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::IntDiv => "//",
            BinOp::Mod => "%",
            BinOp::Pow => "^",
        }
    }
}

/// Prefix operators.
/// 前缀运算符。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Inc,
    Dec,
    Len,
}

impl UnaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::Inc => "++",
            UnaryOp::Dec => "--",
            UnaryOp::Len => "#",
        }
    }
}

/// Postfix operators.
/// 后缀运算符。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostfixOp {
    Inc,
    Dec,
}

impl PostfixOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostfixOp::Inc => "++",
            PostfixOp::Dec => "--",
        }
    }
}

/// Assignment operators.
/// 赋值运算符。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
}

impl AssignOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignOp::Assign => "=",
            AssignOp::AddAssign => "+=",
            AssignOp::SubAssign => "-=",
            AssignOp::MulAssign => "*=",
            AssignOp::DivAssign => "/=",
            AssignOp::ModAssign => "%=",
        }
    }
}

/// Which output builtin a statement uses.
/// 输出语句使用的内建函数。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// `nova` prints with a trailing newline. / 带换行输出。
    Nova,
    /// `lumen` prints without one. / 不带换行输出。
    Lumen,
}

impl OutputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputKind::Nova => "nova",
            OutputKind::Lumen => "lumen",
        }
    }
}

/// Kind of literal leaf.
/// 字面量叶节点的类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LitKind {
    Int,
    Float,
    Str,
    Char,
    Bool,
}
