//! Example types shared by the integration tests.
#![allow(dead_code)]

use shapeschema::{Annotation, Describe, Descriptor, Element, PrimitiveKind};

pub enum TestEnum {
    A,
    B,
    C,
}

impl Describe for TestEnum {
    fn descriptor() -> Descriptor {
        Descriptor::enumeration("TestEnum", ["A", "B", "C"])
    }
}

pub struct TestDataClass {
    pub name: String,
    pub owner: String,
    pub nested: NestedDataClass,
}

impl Describe for TestDataClass {
    fn descriptor() -> Descriptor {
        Descriptor::class("TestDataClass")
            .with(Element::of::<String>("name"))
            .with(Element::of::<String>("owner").optional())
            .with(Element::of::<NestedDataClass>("nested"))
            .build()
    }
}

pub struct NestedDataClass {
    pub nested_name: String,
    pub nested_owner: String,
}

impl Describe for NestedDataClass {
    fn descriptor() -> Descriptor {
        Descriptor::class("NestedDataClass")
            .with(Element::of::<String>("nestedName").optional())
            .with(Element::of::<String>("nestedOwner"))
            .build()
    }
}

pub struct TestInlineClass(pub String);

impl Describe for TestInlineClass {
    fn descriptor() -> Descriptor {
        Descriptor::inline("TestInlineClass", Element::of::<String>("value"))
    }
}

pub struct TestDescription {
    pub property: String,
    pub nested_property: NestedDescription,
    pub value_property: TestInlineDescription,
}

impl Describe for TestDescription {
    fn descriptor() -> Descriptor {
        Descriptor::class("TestDescription")
            .annotate(Annotation::Description("TestDescription".into()))
            .with(
                Element::of::<String>("property")
                    .annotate(Annotation::Description("This is a long description".into())),
            )
            .with(
                Element::of::<NestedDescription>("nestedProperty")
                    .annotate(Annotation::Description("This is a nested property".into())),
            )
            .with(
                Element::of::<TestInlineDescription>("valueProperty")
                    .annotate(Annotation::Description("This is a inline property".into())),
            )
            .build()
    }
}

pub struct NestedDescription {
    pub nested_name: String,
}

impl Describe for NestedDescription {
    fn descriptor() -> Descriptor {
        Descriptor::class("NestedDescription")
            .with(
                Element::of::<String>("nestedName")
                    .optional()
                    .annotate(Annotation::Description("This is a nested name".into())),
            )
            .build()
    }
}

pub struct TestInlineDescription(pub String);

impl Describe for TestInlineDescription {
    fn descriptor() -> Descriptor {
        Descriptor::inline(
            "TestInlineDescription",
            Element::of::<String>("value")
                .annotate(Annotation::Description("This is a description on value class".into())),
        )
    }
}

pub struct TitleTest(pub String);

impl Describe for TitleTest {
    fn descriptor() -> Descriptor {
        Descriptor::inline("TitleTest", Element::of::<String>("value").optional())
            .with_annotation(Annotation::Title("TestTitle".into()))
            .with_annotation(Annotation::Comment("TestComment".into()))
    }
}

pub struct StringConstraintsTest(pub String);

impl Describe for StringConstraintsTest {
    fn descriptor() -> Descriptor {
        Descriptor::inline(
            "StringConstraintsTest",
            Element::of::<String>("value")
                .optional()
                .annotate(Annotation::MinLength(5))
                .annotate(Annotation::MaxLength(10))
                .annotate(Annotation::Format("email".into()))
                .annotate(Annotation::Pattern("^[a-zA-Z0-9]+$".into())),
        )
    }
}

pub struct NumberConstraintsTest(pub f64);

impl Describe for NumberConstraintsTest {
    fn descriptor() -> Descriptor {
        Descriptor::inline(
            "NumberConstraintsTest",
            Element::of::<f64>("value")
                .optional()
                .annotate(Annotation::MinimumDouble(1.0))
                .annotate(Annotation::MaximumDouble(10.0))
                .annotate(Annotation::ExclusiveMinimumDouble(0.0))
                .annotate(Annotation::ExclusiveMaximumDouble(11.0))
                .annotate(Annotation::MultipleOfDouble(2.0)),
        )
    }
}

pub struct SealedClass0 {
    pub name0: String,
    pub owner0: String,
}

impl Describe for SealedClass0 {
    fn descriptor() -> Descriptor {
        Descriptor::class("SealedClass0")
            .with(Element::of::<String>("name0"))
            .with(Element::of::<String>("owner0").optional())
            .build()
    }
}

pub struct SealedClass1 {
    pub name1: String,
    pub owner1: String,
}

impl Describe for SealedClass1 {
    fn descriptor() -> Descriptor {
        Descriptor::class("SealedClass1")
            .with(Element::of::<String>("name1"))
            .with(Element::of::<String>("owner1").optional())
            .build()
    }
}

pub enum SealedInterface {
    Zero(SealedClass0),
    One(SealedClass1),
}

impl Describe for SealedInterface {
    fn descriptor() -> Descriptor {
        Descriptor::sealed("SealedInterface")
            .variant(SealedClass0::descriptor())
            .variant(SealedClass1::descriptor())
            .build()
    }
}

pub struct Recursive {
    pub next: Option<Box<Recursive>>,
}

impl Describe for Recursive {
    fn descriptor() -> Descriptor {
        Descriptor::class("Recursive")
            .annotate(Annotation::Ref("recursive".into()))
            .with(Element::of::<Option<Box<Recursive>>>("next").optional())
            .build()
    }
}

pub struct RecursiveWithSerialName {
    pub next: Option<Box<RecursiveWithSerialName>>,
}

impl Describe for RecursiveWithSerialName {
    fn descriptor() -> Descriptor {
        Descriptor::class("RecursiveWithSerialName")
            .annotate(Annotation::RefWithSerialName)
            .with(Element::of::<Option<Box<RecursiveWithSerialName>>>("next").optional())
            .build()
    }
}

pub enum Tree {
    Node(Node),
}

impl Describe for Tree {
    fn descriptor() -> Descriptor {
        Descriptor::sealed("Tree")
            .annotate(Annotation::RefWithSerialName)
            .variant(Node::descriptor())
            .build()
    }
}

pub struct Node {
    pub value: String,
    pub left: Option<Box<Tree>>,
    pub right: Option<Box<Tree>>,
}

impl Describe for Node {
    fn descriptor() -> Descriptor {
        Descriptor::class("Node")
            .annotate(Annotation::RefWithSerialName)
            .with(Element::of::<String>("value"))
            .with(Element::of::<Option<Box<Tree>>>("left").optional())
            .with(Element::of::<Option<Box<Tree>>>("right").optional())
            .build()
    }
}

pub struct Code(pub String);

impl Describe for Code {
    fn descriptor() -> Descriptor {
        Descriptor::primitive("Code", PrimitiveKind::String)
            .with_annotation(Annotation::RefWithSerialName)
            .with_annotation(Annotation::Pattern("^[A-Z]+$".into()))
    }
}

pub struct Voucher {
    pub code: Code,
}

impl Describe for Voucher {
    fn descriptor() -> Descriptor {
        Descriptor::class("Voucher")
            .with(
                Element::of::<Code>("code")
                    .annotate(Annotation::Description("Printed on the voucher".into()))
                    .annotate(Annotation::MinLength(3)),
            )
            .build()
    }
}

pub struct Email(pub String);

impl Describe for Email {
    fn descriptor() -> Descriptor {
        Descriptor::inline("Email", Element::of::<String>("value"))
            .with_annotation(Annotation::RefWithSerialName)
            .with_annotation(Annotation::Format("email".into()))
    }
}

pub struct Url(pub String);

impl Describe for Url {
    fn descriptor() -> Descriptor {
        Descriptor::inline(
            "Url",
            Element::of::<String>("value").annotate(Annotation::Format("uri".into())),
        )
        .with_annotation(Annotation::RefWithSerialName)
    }
}

pub struct Contact {
    pub email: Email,
    pub site: Option<Url>,
}

impl Describe for Contact {
    fn descriptor() -> Descriptor {
        Descriptor::class("Contact")
            .with(Element::of::<Email>("email").annotate(Annotation::MaxLength(254)))
            .with(Element::of::<Option<Url>>("site").optional())
            .build()
    }
}
