//! Integration tests for fastinit-core through its public API.

use fastinit_core::prelude::*;

fn stamp(options: &ProjectOptions) -> String {
    RenderContext::for_options(options).render("# {{PROJECT_MODULE}} on {{DATABASE}}\n")
}

fn catalog() -> TemplateCatalog {
    TemplateCatalog::new(vec![
        TemplateDescriptor::new("app/main.py", Feature::Core, stamp),
        TemplateDescriptor::new("app/db/base.py", Feature::DbBase, stamp),
        TemplateDescriptor::new("app/db/session.py", Feature::Database, stamp),
        TemplateDescriptor::new("app/models/__init__.py", Feature::Models, stamp),
        TemplateDescriptor::variant("app/models/user.py", Orm::SqlAlchemy, stamp),
        TemplateDescriptor::variant("app/models/user.py", Orm::SqlModel, stamp),
        TemplateDescriptor::new("Dockerfile", Feature::Docker, stamp),
    ])
    .unwrap()
}

fn raw(database: &str, orm: &str) -> RawOptions {
    RawOptions {
        name: "my-api".into(),
        database: database.into(),
        orm: orm.into(),
        linter: "none".into(),
        test_framework: "none".into(),
        docker: "no".into(),
    }
}

#[test]
fn raw_options_flow_into_a_plan() {
    let options = ProjectOptions::from_raw(&raw("postgres", "sqlmodel")).unwrap();
    let plan = CompositionResolver::new(&catalog()).resolve(&options).unwrap();

    let paths: Vec<_> = plan.paths().map(|p| p.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "app/db/base.py",
            "app/db/session.py",
            "app/main.py",
            "app/models/__init__.py",
            "app/models/user.py",
        ]
    );
    assert_eq!(plan.get("app/main.py").unwrap().content(), "# my_api on PostgreSQL\n");
    assert_eq!(plan.get("app/models/user.py").unwrap().origin(), "orm[sqlmodel]");
}

#[test]
fn invalid_selection_is_a_configuration_error() {
    let err: FastinitError = ProjectOptions::from_raw(&raw("oracle", "none"))
        .unwrap_err()
        .into();

    assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
    let message = err.to_string();
    assert!(message.contains("database"));
    assert!(message.contains("postgresql"));
}

#[test]
fn overlapping_descriptors_are_a_conflict() {
    let catalog = TemplateCatalog::new(vec![
        TemplateDescriptor::new("README.md", Feature::Core, stamp),
        TemplateDescriptor::new("README.md", Feature::Docker, stamp),
    ])
    .unwrap();
    let options = ProjectOptions::builder().name("demo").unwrap().docker(true).build();

    let err: FastinitError = CompositionResolver::new(&catalog)
        .resolve(&options)
        .unwrap_err()
        .into();
    assert_eq!(err.kind(), ErrorKind::TemplateConflict);
    assert!(!err.suggestions().is_empty());
}

#[test]
fn catalog_service_reports_activation() {
    let service = CatalogService::new(std::sync::Arc::new(catalog()));
    let infos = service.for_feature(Feature::Docker);
    assert_eq!(infos.len(), 1);
    assert_eq!(infos[0].path, "Dockerfile");
    assert_eq!(infos[0].activated_by, "docker = yes");
}
