use super::*;
use crate::cs::member_id::MemberKind;
use crate::test_utils::get_sample_docs_path;

fn parse(xml: &str) -> XmlDocument {
    XmlDocument::parse(xml).expect("test document should parse")
}

fn doc_with_members(assembly: &str, members: &str) -> XmlDocument {
    parse(&format!(
        "<doc><assembly><name>{}</name></assembly><members>{}</members></doc>",
        assembly, members
    ))
}

#[test]
fn test_extract_single_method() {
    let doc = doc_with_members(
        "MyLib",
        "<member name=\"M:MyLib.Calc.Add(System.Int32,System.Int32)\">\
            <summary>  Adds two numbers.\n  </summary>\
            <param name=\"a\">first value</param>\
         </member>",
    );

    let members = extract_members(&doc, None).unwrap();
    assert_eq!(members.len(), 1);

    let add = &members[0];
    assert_eq!(add.kind, MemberKind::Method);
    assert_eq!(add.owning_type, "MyLib.Calc");
    assert_eq!(add.member_name, "Add");
    assert_eq!(add.summary, "Adds two numbers.");
    assert_eq!(add.parameters.len(), 1);
    assert_eq!(add.parameters.get("a"), Some("first value"));
    assert!(add.type_parameters.is_empty());
    assert_eq!(add.returns, "");
    assert_eq!(add.remarks, "");
    assert_eq!(add.example, "");
}

#[test]
fn test_duplicate_parameters_keep_first() {
    let doc = doc_with_members(
        "MyLib",
        r#"<member name="M:MyLib.Calc.Negate(System.Int32)">
            <param name="x">original text</param>
            <param name="x">duplicate text</param>
            <typeparam name="T">first</typeparam>
            <typeparam name="T">second</typeparam>
        </member>"#,
    );

    let members = extract_members(&doc, None).unwrap();
    let negate = &members[0];
    assert_eq!(negate.parameters.len(), 1);
    assert_eq!(negate.parameters.get("x"), Some("original text"));
    assert_eq!(negate.type_parameters.get("T"), Some("first"));
}

#[test]
fn test_missing_assembly_name_is_fatal() {
    let doc = parse(r#"<doc><members><member name="T:MyLib.Calc"/></members></doc>"#);
    assert!(matches!(extract_members(&doc, None), Err(CsError::MissingAssemblyName)));

    // An assembly element without a name child is just as unusable
    let doc = parse(r#"<doc><assembly/><members><member name="T:MyLib.Calc"/></members></doc>"#);
    assert!(matches!(extract_members(&doc, Some("MyLib")), Err(CsError::MissingAssemblyName)));
}

#[test]
fn test_malformed_entries_are_skipped() {
    let doc = doc_with_members(
        "MyLib",
        r#"<member name="N:MyLib"/>
           <member name="T:MyLib.First"/>
           <member name="garbage"/>
           <member/>
           <member name="X:MyLib.Unknown.Kind"/>
           <member name="T:MyLib.Second"/>"#,
    );

    let members = extract_members(&doc, None).unwrap();
    let names: Vec<String> = members.iter().map(|m| m.to_string()).collect();
    assert_eq!(names, vec!["Type:MyLib.First.First", "Type:MyLib.Second.Second"]);
}

#[test]
fn test_document_order_and_duplicates_preserved() {
    let doc = doc_with_members(
        "MyLib",
        r#"<member name="P:MyLib.Zeta.Value"/>
           <member name="P:MyLib.Alpha.Value"/>
           <member name="P:MyLib.Zeta.Value"/>"#,
    );

    let members = extract_members(&doc, None).unwrap();
    let types: Vec<&str> = members.iter().map(|m| m.owning_type.as_str()).collect();
    assert_eq!(types, vec!["MyLib.Zeta", "MyLib.Alpha", "MyLib.Zeta"]);
    assert_eq!(members[0], members[2]);
}

#[test]
fn test_resolution_namespace_defaults_to_assembly() {
    let doc = doc_with_members(
        "Acme.Widgets",
        r#"<member name="T:Acme.Widgets.Factory">
            <summary>Builds <see cref="T:Acme.Widgets.Gadget"/> from <see cref="T:Other.Thing"/>.</summary>
        </member>"#,
    );

    let members = extract_members(&doc, None).unwrap();
    assert_eq!(
        members[0].summary,
        "Builds [Acme.Widgets.Gadget](Acme.Widgets#gadget) from `Other.Thing`."
    );

    let members = extract_members(&doc, Some("Other")).unwrap();
    assert_eq!(
        members[0].summary,
        "Builds `Acme.Widgets.Gadget` from [Other.Thing](Other#thing)."
    );
}

#[test]
fn test_remarks_and_returns_are_not_rewritten() {
    let doc = doc_with_members(
        "MyLib",
        r#"<member name="M:MyLib.Calc.Sum(System.Int32[])">
            <returns>  The total of <paramref name="values"/>.  </returns>
            <remarks>
              Uses <see cref="T:MyLib.Accumulator"/> internally.
            </remarks>
            <param name="values">Numbers passed to <see cref="T:MyLib.Accumulator"/>.</param>
        </member>"#,
    );

    let members = extract_members(&doc, None).unwrap();
    let sum = &members[0];
    assert_eq!(sum.returns, "The total of .");
    assert_eq!(sum.remarks, "Uses  internally.");
    assert_eq!(
        sum.parameters.get("values"),
        Some("Numbers passed to [MyLib.Accumulator](MyLib#accumulator).")
    );
}

#[test]
fn test_example_is_fenced_and_unindented() {
    let doc = doc_with_members(
        "MyLib",
        "<member name=\"M:MyLib.Calc.Add(System.Int32,System.Int32)\">\
            <example>\n    <code>\n    if (a &lt; b)\n        return b;\n    </code>\n    </example>\
         </member>",
    );

    let members = extract_members(&doc, None).unwrap();
    assert_eq!(members[0].example, "```csharp\nif (a < b)\n    return b;\n```");
}

#[test]
fn test_empty_elements_give_empty_fields() {
    let doc = doc_with_members(
        "MyLib",
        r#"<member name="P:MyLib.Calc.Mode"><summary></summary><example/><returns/></member>"#,
    );

    let members = extract_members(&doc, None).unwrap();
    assert_eq!(members[0].summary, "");
    assert_eq!(members[0].example, "");
    assert_eq!(members[0].returns, "");
}

#[test]
fn test_parameter_without_name_is_ignored() {
    let doc = doc_with_members(
        "MyLib",
        r#"<member name="M:MyLib.Calc.Clear"><param>orphan</param><param name="keep">kept</param></member>"#,
    );

    let members = extract_members(&doc, None).unwrap();
    assert_eq!(members[0].parameters.keys().collect::<Vec<_>>(), vec!["keep"]);
}

#[test]
fn test_multiline_parameter_text_is_trimmed_only_at_the_ends() {
    let doc = doc_with_members(
        "MyLib",
        "<member name=\"M:MyLib.Calc.Sum(System.Int32[])\">\
            <param name=\"values\">\n      Numbers to add,\n      in any order.\n    </param>\
            <typeparam name=\"T\">\n      Element type.\n    </typeparam>\
         </member>",
    );

    let members = extract_members(&doc, None).unwrap();
    assert_eq!(
        members[0].parameters.get("values"),
        Some("Numbers to add,\n      in any order.")
    );
    assert_eq!(members[0].type_parameters.get("T"), Some("Element type."));
}

#[test]
fn test_entities_survive_rewriting() {
    let doc = doc_with_members(
        "MyLib",
        r#"<member name="M:MyLib.Calc.And(System.Boolean,System.Boolean)">
            <summary>Returns a &amp;&amp; b for <see cref="T:MyLib.Pair&lt;T&gt;"/>.</summary>
            <param name="a">left &lt;operand&gt; &unknown;</param>
        </member>"#,
    );

    let members = extract_members(&doc, None).unwrap();
    assert_eq!(members[0].summary, "Returns a && b for [MyLib.Pair<T>](MyLib#pair<t>).");
    assert_eq!(members[0].parameters.get("a"), Some("left <operand> &unknown;"));
}

#[test]
fn test_unescape_text() {
    assert_eq!(unescape_text("List&lt;int&gt;"), "List<int>");
    assert_eq!(unescape_text("a &amp;&amp; b"), "a && b");
    assert_eq!(unescape_text("&quot;quoted&quot; &apos;single&apos;"), "\"quoted\" 'single'");
    assert_eq!(unescape_text("&amp;unknown;"), "&unknown;");
    // Text that is not valid escaped markup comes back unchanged
    assert_eq!(unescape_text("fish & chips"), "fish & chips");
    assert_eq!(unescape_text("no entities"), "no entities");
}

#[test]
fn test_assembly_name() {
    let doc = doc_with_members("  MyLib  ", "");
    assert_eq!(assembly_name(&doc).unwrap(), "MyLib");
}

#[tokio::test]
async fn test_extract_sample_export() {
    let doc = XmlDocument::load(&get_sample_docs_path()).await.unwrap();
    let members = extract_members(&doc, None).unwrap();

    let names: Vec<String> = members.iter().map(|m| m.to_string()).collect();
    assert_eq!(
        names,
        vec![
            "Type:MyLib.Calc.Calc",
            "Method:MyLib.Calc.Add",
            "Method:MyLib.Calc.Max``1",
            "Property:MyLib.Calc.Precision",
            "Field:MyLib.Calc.DefaultPrecision",
            "Event:MyLib.Calc.Overflowed",
        ]
    );

    let calc = &members[0];
    assert_eq!(calc.kind, MemberKind::Type);
    assert_eq!(calc.owning_type, "MyLib.Calc");
    assert_eq!(
        calc.summary,
        "Simple arithmetic on integers.    See [MyLib.Calc.Options](MyLib.Calc#options) and `System.Math`."
    );
    assert_eq!(calc.remarks, "Not thread safe.");

    let add = &members[1];
    assert_eq!(add.summary, "Adds `a` and `b`.");
    assert_eq!(add.parameters.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(add.parameters.get("b"), Some("second value"));
    assert_eq!(add.returns, "The sum of  and .");
    assert_eq!(
        add.example,
        "```csharp\nvar calc = new Calc();\nvar sum = calc.Add(1, 2);\n```"
    );

    let max = &members[2];
    assert_eq!(max.type_parameters.get("T"), Some("Comparable type, see `System.IComparable`1`."));
    assert_eq!(max.parameters.get("left"), Some("Left <operand>"));

    let field = &members[4];
    assert_eq!(field.summary, "");
    assert!(field.parameters.is_empty());
}
