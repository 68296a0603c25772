use svg_js_inline::{
    MalformedDocument, SyntaxErrorKind,
    config::{ModuleOptions, TransformOptions},
    transform,
};

fn esm(code: &str) -> String {
    transform(code, &Default::default()).unwrap()
}

fn cjs(code: &str) -> String {
    transform(
        code,
        &TransformOptions {
            module: ModuleOptions { cjs_module: true },
            ..Default::default()
        },
    )
    .unwrap()
}

fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("`{needle}` not found in `{haystack}`"))
}

#[test]
fn single_element_sets_attribute_on_root() {
    for (tag_attr, value) in [("a", "v"), ("test", "hi"), ("fill", "")] {
        let output = esm(&format!(r#"<svg {tag_attr}="{value}"/>"#));
        assert_eq!(
            output
                .matches(&format!("s.setAttribute('{tag_attr}','{value}');"))
                .count(),
            1
        );
        assert_eq!(output.matches(".setAttribute(").count(), 1);
        assert!(!output.contains("p="));
        assert!(!output.contains("e="));
    }
}

#[test]
fn single_child_declares_once() {
    let output = esm("<svg><div></div></svg>");
    assert_eq!(output.matches("let p=").count(), 1);
    assert_eq!(output.matches("let e=").count(), 1);
    assert!(output.contains(".createElement('div');p.appendChild(e)"));
}

#[test]
fn declares_once_regardless_of_siblings() {
    let output = esm("<svg><g/><g><rect/></g><circle/></svg>");
    assert_eq!(output.matches("let p=").count(), 1);
    assert_eq!(output.matches("let e=").count(), 1);
}

#[test]
fn child_attributes_target_child() {
    let output = esm(r#"<svg><div test="hi"></div></svg>"#);
    assert!(output.contains(".createElement('div');p.appendChild(e)"));
    assert!(output.contains("e.setAttribute('test','hi')"));
}

#[test]
fn root_attributes_before_children() {
    let output = esm(r#"<svg one="1"><div></div></svg>"#);
    assert!(position(&output, "s.setAttribute('one','1')") < position(&output, "let p=s;"));
    assert!(output.contains(".createElement('div');p.appendChild(e)"));
}

#[test]
fn esm_by_default() {
    let output = esm("<svg></svg>");
    assert!(output.starts_with("export default function(){"));
    assert!(!output.contains("module.exports"));
    assert_eq!(
        output,
        "export default function(){const s=document.createElement('svg');return s;}"
    );

    let explicit = transform(
        "<svg></svg>",
        &TransformOptions {
            module: ModuleOptions { cjs_module: false },
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(explicit, output);
}

#[test]
fn cjs_when_requested() {
    let output = cjs("<svg></svg>");
    assert!(output.starts_with("module.exports=function(){"));
    assert!(!output.contains("export default"));
    assert_eq!(
        output.strip_prefix("module.exports=function(){"),
        esm("<svg></svg>").strip_prefix("export default function(){")
    );
}

#[test]
fn rejects_other_root() {
    assert_eq!(
        transform("<div><span>not an SVG!</span></div>", &Default::default()),
        Err(MalformedDocument::UnexpectedRootElement {
            tag_name: "div".into()
        })
    );
    assert!(matches!(
        transform("<SVG></SVG>", &Default::default()),
        Err(MalformedDocument::UnexpectedRootElement { .. })
    ));
}

#[test]
fn rejects_missing_root() {
    assert_eq!(
        transform("", &Default::default()),
        Err(MalformedDocument::NoRootElement)
    );
    assert_eq!(
        transform("<?xml version=\"1.0\"?><!-- nothing -->", &Default::default()),
        Err(MalformedDocument::NoRootElement)
    );
}

#[test]
fn rejects_broken_markup() {
    let Err(MalformedDocument::Syntax(err)) =
        transform("<svg><path></svg>", &Default::default())
    else {
        panic!("expect syntax error");
    };
    assert_eq!(err.kind, SyntaxErrorKind::ExpectCloseTag);

    assert!(matches!(
        transform("<svg", &Default::default()),
        Err(MalformedDocument::Syntax(_))
    ));
}

#[test]
fn rejects_deeply_nested_markup() {
    let code = format!("<svg>{}{}</svg>", "<g>".repeat(20_000), "</g>".repeat(20_000));
    let Err(MalformedDocument::Syntax(err)) = transform(&code, &Default::default()) else {
        panic!("expect syntax error");
    };
    assert_eq!(err.kind, SyntaxErrorKind::NestingTooDeep);

    let code = format!("<svg>{}{}</svg>", "<g>".repeat(500), "</g>".repeat(500));
    assert_eq!(esm(&code).matches("p.appendChild(e);").count(), 500);
}

#[test]
fn deterministic() {
    let input = r#"<svg one="1"><g><path d="M0 0"/></g><circle r="1"/></svg>"#;
    assert_eq!(esm(input), esm(input));
    assert_eq!(cjs(input), cjs(input));
}

#[test]
fn only_assigns_p_to_s_once() {
    let output = esm(r#"<svg one="1" two="2"><div three="3"></div><div four="4"></div></svg>"#);
    assert_eq!(output.matches("p=s").count(), 1);
    assert_eq!(output.matches("let p=").count(), 1);
    assert_eq!(output.matches("createElement('div')").count(), 2);

    let first = position(&output, "createElement('div');p.appendChild(e);");
    let three = position(&output, "e.setAttribute('three','3');");
    assert!(first < three);

    let second = output[three..]
        .find("createElement('div');p.appendChild(e);")
        .map(|i| i + three)
        .unwrap();
    let four = position(&output, "e.setAttribute('four','4');");
    assert!(second < four);
}

#[test]
fn later_sibling_attaches_to_shared_parent() {
    let output = esm("<svg><g><rect/></g><circle/></svg>");
    let circle = position(&output, "e=document.createElement('circle');");
    assert!(output[..circle].ends_with("e=e.parentNode;e=e.parentNode;p=e;"));
}

#[test]
fn values_are_not_escaped() {
    let output = esm(r#"<svg aria-label="it&apos;s"/>"#);
    assert!(output.contains("s.setAttribute('aria-label','it's');"));
}
