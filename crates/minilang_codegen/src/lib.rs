//! Minilang Code Generation
//!
//! 把 AST（优化前或优化后均可）渲染为一行目标代码：
//! - `Assign` -> `let <variable> = <value>`
//! - `add(..)` -> 参数以 ` + ` 连接的中缀形式
//! - 其它调用保持 `name(arg, ...)` 形式
//! - 字符串字面量重新加上双引号

use minilang_syntax::{Node, FOLDABLE_OPERATOR};

/// 编译一个 AST 节点为目标代码
pub fn compile(node: &Node) -> String {
    let mut out = String::new();
    emit(node, &mut out);
    out
}

fn emit(node: &Node, out: &mut String) {
    match node {
        Node::Assign { variable, value } => {
            out.push_str("let ");
            out.push_str(variable);
            out.push_str(" = ");
            emit(value, out);
        }
        Node::Call { name, arguments } if name == FOLDABLE_OPERATOR => {
            emit_list(arguments, " + ", out);
        }
        Node::Call { name, arguments } => {
            out.push_str(name);
            out.push('(');
            emit_list(arguments, ", ", out);
            out.push(')');
        }
        Node::Number { value } => out.push_str(&value.to_string()),
        Node::Variable { name } => out.push_str(name),
        Node::String { value } => {
            out.push('"');
            out.push_str(value);
            out.push('"');
        }
    }
}

fn emit_list(nodes: &[Node], separator: &str, out: &mut String) {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        emit(node, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_number_assignment() {
        let ast = Node::assign("a", Node::number(1));
        assert_eq!(compile(&ast), "let a = 1");
    }

    #[test]
    fn test_compile_add_is_infix() {
        let ast = Node::assign(
            "a",
            Node::call("add", vec![Node::variable("b"), Node::number(1)]),
        );
        assert_eq!(compile(&ast), "let a = b + 1");
    }

    #[test]
    fn test_compile_plain_call() {
        let ast = Node::assign(
            "a",
            Node::call(
                "foobar",
                vec![Node::number(1), Node::number(2), Node::number(3)],
            ),
        );
        assert_eq!(compile(&ast), "let a = foobar(1, 2, 3)");
    }

    #[test]
    fn test_compile_unoptimized_nested_add() {
        let ast = Node::assign(
            "a",
            Node::call(
                "add",
                vec![
                    Node::call("add", vec![Node::number(1), Node::number(2)]),
                    Node::call("add", vec![Node::number(3), Node::variable("b")]),
                ],
            ),
        );
        assert_eq!(compile(&ast), "let a = 1 + 2 + 3 + b");
    }

    #[test]
    fn test_compile_add_inside_call() {
        let ast = Node::call(
            "foo",
            vec![Node::call("add", vec![Node::variable("x"), Node::number(2)])],
        );
        assert_eq!(compile(&ast), "foo(x + 2)");
    }

    #[test]
    fn test_compile_string() {
        let ast = Node::assign("s", Node::string("hello"));
        assert_eq!(compile(&ast), "let s = \"hello\"");
    }

    #[test]
    fn test_compile_degenerate_add() {
        assert_eq!(compile(&Node::call("add", vec![])), "");
        assert_eq!(compile(&Node::call("add", vec![Node::number(9)])), "9");
        assert_eq!(compile(&Node::call("now", vec![])), "now()");
    }

    #[test]
    fn test_compile_leaves() {
        assert_eq!(compile(&Node::number(42)), "42");
        assert_eq!(compile(&Node::variable("x")), "x");
    }
}
