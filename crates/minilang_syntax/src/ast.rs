//! AST - 抽象语法树
//!
//! 封闭的节点集合。每个节点由父节点独占，树中没有共享或循环引用。

use serde::Serialize;

/// 内置的可折叠运算符（满足交换律与结合律），代码生成时渲染为中缀 `+`
pub const FOLDABLE_OPERATOR: &str = "add";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Node {
    // 赋值语句: a = <value>，每次解析的根节点
    Assign { variable: String, value: Box<Node> },

    // 函数调用: add(b, 1)，参数可以为空
    Call { name: String, arguments: Vec<Node> },

    // 非负整数字面量
    Number { value: u64 },

    // 变量引用
    Variable { name: String },

    // 字符串字面量（不含引号）
    String { value: String },
}

impl Node {
    pub fn assign(variable: impl Into<String>, value: Node) -> Self {
        Self::Assign {
            variable: variable.into(),
            value: Box::new(value),
        }
    }

    pub fn call(name: impl Into<String>, arguments: Vec<Node>) -> Self {
        Self::Call {
            name: name.into(),
            arguments,
        }
    }

    pub fn number(value: u64) -> Self {
        Self::Number { value }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable { name: name.into() }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::String {
            value: value.into(),
        }
    }

    /// 是否为对 `name` 的调用
    pub fn is_call_to(&self, name: &str) -> bool {
        matches!(self, Self::Call { name: callee, .. } if callee == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_call_to() {
        let node = Node::call("add", vec![Node::number(1)]);
        assert!(node.is_call_to("add"));
        assert!(!node.is_call_to("foo"));
        assert!(!Node::variable("add").is_call_to("add"));
    }

    #[test]
    fn test_serialize_shape() {
        let node = Node::assign(
            "a",
            Node::call("add", vec![Node::variable("b"), Node::number(1)]),
        );
        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "type": "ASSIGN",
                "variable": "a",
                "value": {
                    "type": "CALL",
                    "name": "add",
                    "arguments": [
                        {"type": "VARIABLE", "name": "b"},
                        {"type": "NUMBER", "value": 1}
                    ]
                }
            })
        );
    }
}
