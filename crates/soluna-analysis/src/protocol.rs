//! Wire protocol types.
//!
//! These are the serde shapes of the editor-facing boundary: one
//! request in (`{"code": ...}`), one response out
//! (`{"tokens": [...], "errors": [...], "parseTree": {...}}`). Any
//! transport can be bolted on top of `handle_request`.

use serde::{Deserialize, Serialize};
use soluna_syntax::{NodeKind, ParseNode};
use thiserror::Error;

use crate::{Analysis, analyze};

/// Failure at the protocol boundary. The engine itself is total; only
/// encoding the response can fail.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

/// An inbound analysis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub code: String,
}

/// The outbound analysis response.
///
/// `parseTree` is omitted entirely (not `null`) when withheld, matching
/// what clients already expect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub tokens: Vec<TokenMsg>,
    pub errors: Vec<ErrorMsg>,
    #[serde(rename = "parseTree", skip_serializing_if = "Option::is_none", default)]
    pub parse_tree: Option<NodeMsg>,
}

/// One token on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenMsg {
    #[serde(rename = "type")]
    pub token_type: String,
    pub value: String,
    pub line: u32,
    pub col: u32,
    pub start: u32,
    pub end: u32,
}

/// One diagnostic on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorMsg {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
    pub line: u32,
    pub col: u32,
}

/// One parse tree node on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeMsg {
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub value: Option<String>,
    pub children: Vec<NodeMsg>,
}

impl NodeMsg {
    fn new(node_type: &str) -> Self {
        Self {
            node_type: node_type.to_string(),
            value: None,
            children: Vec::new(),
        }
    }

    fn with_value(node_type: &str, value: impl Into<String>) -> Self {
        Self {
            node_type: node_type.to_string(),
            value: Some(value.into()),
            children: Vec::new(),
        }
    }

    fn with_children(node_type: &str, children: Vec<NodeMsg>) -> Self {
        Self {
            node_type: node_type.to_string(),
            value: None,
            children,
        }
    }
}

impl Response {
    /// Run the engine on raw source and package the result.
    ///
    /// Empty or whitespace-only input short-circuits to an empty
    /// response without running the engine.
    pub fn from_source(code: &str) -> Self {
        if code.trim().is_empty() {
            return Self {
                tokens: Vec::new(),
                errors: Vec::new(),
                parse_tree: None,
            };
        }
        Self::from_analysis(&analyze(code))
    }

    /// Package an analysis result for the wire.
    ///
    /// The parse tree is withheld while lexical errors exist: a client
    /// must never render a tree built over misread tokens.
    pub fn from_analysis(analysis: &Analysis) -> Self {
        let tokens = analysis
            .tokens
            .iter()
            .map(|t| TokenMsg {
                token_type: t.kind.type_str().to_string(),
                value: t.lexeme.clone(),
                line: t.span.start.line,
                col: t.span.start.col,
                start: t.span.start.offset,
                end: t.span.end.offset,
            })
            .collect();

        let errors = analysis
            .diagnostics
            .iter()
            .map(|d| ErrorMsg {
                error_type: d.code.as_str().to_string(),
                message: d.message.clone(),
                line: d.span.start.line,
                col: d.span.start.col,
            })
            .collect();

        let parse_tree = if analysis.has_lexical_errors() {
            None
        } else {
            analysis.tree.as_ref().map(node_to_msg)
        };

        Self {
            tokens,
            errors,
            parse_tree,
        }
    }
}

/// Decode an inbound message, run the engine, and encode the response.
///
/// A payload that is not a `{"code": ...}` object is tolerated as raw
/// source text, like the original transport did.
pub fn handle_request(input: &str) -> Result<String, ProtocolError> {
    let code = match serde_json::from_str::<Request>(input) {
        Ok(request) => request.code,
        Err(_) => input.to_string(),
    };

    let response = Response::from_source(&code);
    Ok(serde_json::to_string(&response)?)
}

/// Lower a parse node to its wire shape.
fn node_to_msg(node: &ParseNode) -> NodeMsg {
    match &node.kind {
        NodeKind::Program { items } => {
            NodeMsg::with_children("Program", items.iter().map(node_to_msg).collect())
        }

        NodeKind::FuncDecl {
            return_type,
            name,
            params,
            body,
        } => NodeMsg::with_children(
            "FunctionDefinition",
            vec![
                node_to_msg(return_type),
                node_to_msg(name),
                NodeMsg::with_children("Parameters", params.iter().map(node_to_msg).collect()),
                node_to_msg(body),
            ],
        ),
        NodeKind::Param { data_type, name } => NodeMsg::with_children(
            "Parameter",
            vec![node_to_msg(data_type), node_to_msg(name)],
        ),

        NodeKind::VarDecl {
            constant,
            data_type,
            names,
            values,
        } => {
            let mut children = Vec::new();
            if *constant {
                children.push(NodeMsg::with_value("Mutability", "zeta"));
            }
            children.push(node_to_msg(data_type));
            children.extend(names.iter().map(node_to_msg));
            if !values.is_empty() {
                children.push(NodeMsg::with_children(
                    "Values",
                    values.iter().map(node_to_msg).collect(),
                ));
            }
            NodeMsg::with_children("VariableDeclaration", children)
        }

        NodeKind::TableDecl {
            data_type,
            name,
            elements,
        } => NodeMsg::with_children(
            "TableDeclaration",
            vec![
                node_to_msg(data_type),
                node_to_msg(name),
                NodeMsg::with_children("Elements", elements.iter().map(node_to_msg).collect()),
            ],
        ),

        NodeKind::LocalDecl { decl } => {
            NodeMsg::with_children("LocalDeclaration", vec![node_to_msg(decl)])
        }

        NodeKind::Block { stmts } => {
            NodeMsg::with_children("Block", stmts.iter().map(node_to_msg).collect())
        }

        NodeKind::IfStatement {
            cond,
            then_block,
            elifs,
            else_block,
        } => {
            let mut children = vec![
                NodeMsg::with_children("Condition", vec![node_to_msg(cond)]),
                NodeMsg::with_children("TrueBlock", vec![node_to_msg(then_block)]),
            ];
            children.extend(elifs.iter().map(node_to_msg));
            if let Some(block) = else_block {
                children.push(NodeMsg::with_children("Else", vec![node_to_msg(block)]));
            }
            NodeMsg::with_children("IfStatement", children)
        }
        NodeKind::ElseIf { cond, block } => NodeMsg::with_children(
            "ElseIf",
            vec![
                NodeMsg::with_children("Condition", vec![node_to_msg(cond)]),
                node_to_msg(block),
            ],
        ),

        NodeKind::WhileLoop { cond, body } => NodeMsg::with_children(
            "WhileLoop",
            vec![
                NodeMsg::with_children("Condition", vec![node_to_msg(cond)]),
                node_to_msg(body),
            ],
        ),

        NodeKind::ForLoop {
            var,
            init,
            limit,
            step,
            body,
        } => NodeMsg::with_children(
            "ForLoop",
            vec![
                NodeMsg::with_children(
                    "ForInit",
                    vec![
                        NodeMsg::with_value("DataType", "kai"),
                        node_to_msg(var),
                        node_to_msg(init),
                    ],
                ),
                node_to_msg(limit),
                node_to_msg(step),
                node_to_msg(body),
            ],
        ),

        NodeKind::RepeatUntil { body, cond } => NodeMsg::with_children(
            "RepeatUntil",
            vec![
                node_to_msg(body),
                NodeMsg::with_children("Condition", vec![node_to_msg(cond)]),
            ],
        ),

        NodeKind::ReturnStatement { value } => NodeMsg::with_children(
            "ReturnStatement",
            value.iter().map(|v| node_to_msg(v)).collect(),
        ),

        NodeKind::Output { kind, arg } => NodeMsg {
            node_type: "OutputStatement".to_string(),
            value: Some(kind.as_str().to_string()),
            children: vec![node_to_msg(arg)],
        },
        NodeKind::InputExpr => NodeMsg::new("InputExpression"),

        NodeKind::Goto { label } => NodeMsg::with_value("GotoStatement", label.clone()),
        NodeKind::LabelStatement { name } => NodeMsg::with_value("LabelStatement", name.clone()),
        NodeKind::Break => NodeMsg::new("BreakStatement"),
        NodeKind::EmptyStatement => NodeMsg::new("EmptyStatement"),

        NodeKind::Assignment {
            op,
            targets,
            values,
        } => NodeMsg {
            node_type: "Assignment".to_string(),
            value: Some(op.as_str().to_string()),
            children: vec![
                NodeMsg::with_children("Targets", targets.iter().map(node_to_msg).collect()),
                NodeMsg::with_children("Values", values.iter().map(node_to_msg).collect()),
            ],
        },
        NodeKind::ExpressionStatement { expr } => {
            NodeMsg::with_children("ExpressionStatement", vec![node_to_msg(expr)])
        }

        NodeKind::FunctionCall { callee, args } => NodeMsg::with_children(
            "FunctionCall",
            vec![
                node_to_msg(callee),
                NodeMsg::with_children("Arguments", args.iter().map(node_to_msg).collect()),
            ],
        ),
        NodeKind::TableAccess { base, index } => NodeMsg::with_children(
            "TableAccess",
            vec![node_to_msg(base), node_to_msg(index)],
        ),

        NodeKind::Binary { op, lhs, rhs } => NodeMsg {
            node_type: "BinaryExpr".to_string(),
            value: Some(op.as_str().to_string()),
            children: vec![node_to_msg(lhs), node_to_msg(rhs)],
        },
        NodeKind::Unary { op, operand } => NodeMsg {
            node_type: "UnaryExpr".to_string(),
            value: Some(op.as_str().to_string()),
            children: vec![node_to_msg(operand)],
        },
        NodeKind::Postfix { op, operand } => NodeMsg {
            node_type: "UnaryExpr".to_string(),
            value: Some(format!("postfix {}", op.as_str())),
            children: vec![node_to_msg(operand)],
        },

        NodeKind::Ident { name } => NodeMsg::with_value("Identifier", name.clone()),
        NodeKind::Literal { text, .. } => NodeMsg::with_value("Literal", text.clone()),
        NodeKind::DataType { name } => NodeMsg::with_value("DataType", name.clone()),
    }
}
