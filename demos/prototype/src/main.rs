use std::collections::HashMap;
use std::sync::Arc;

use rewire_di::{Autowire, ClassReflection, ConstructorInfo, DynError, Instance, ReflectionAutowire};
use rewire_reflect::{param, ReflectionRegistry};

#[derive(Debug)]
struct SmtpTransport {
    server: String,
}

#[derive(Debug)]
struct Mailer {
    transport: Arc<SmtpTransport>,
}

/// Shows all three resolution paths: a declared type, an annotated key and
/// an optional dependency the service does not have
#[derive(Debug)]
struct Newsletter {
    mailer: Arc<Mailer>,
    audience: Arc<String>,
    archive: Option<Arc<Archive>>,
}

#[derive(Debug)]
struct Archive;

fn build_registry() -> Result<ReflectionRegistry, DynError> {
    let mut registry = ReflectionRegistry::new();

    registry.add_class(
        ClassReflection::new("Mailer", |args: Vec<Option<Instance>>| {
            let transport = args
                .into_iter()
                .next()
                .flatten()
                .ok_or("transport is required")?
                .downcast::<SmtpTransport>()?;
            Ok(Instance::new(Mailer { transport }))
        })
        .with_constructor(ConstructorInfo::new(vec![param(
            "transport",
            "SmtpTransport",
        )])),
    )?;

    registry.add_class(
        ClassReflection::new("Newsletter", |args: Vec<Option<Instance>>| {
            let mut args = args.into_iter();
            let mailer = args
                .next()
                .flatten()
                .ok_or("mailer is required")?
                .downcast::<Mailer>()?;
            let audience = args
                .next()
                .flatten()
                .ok_or("audience is required")?
                .downcast::<String>()?;
            let archive = args
                .next()
                .flatten()
                .map(|instance| instance.downcast::<Archive>())
                .transpose()?;
            Ok(Instance::new(Newsletter {
                mailer,
                audience,
                archive,
            }))
        })
        .with_constructor(
            ConstructorInfo::new(vec![
                param("mailer", "Mailer"),
                param("audience", "String"),
                param("archive", "Archive").nullable(),
            ])
            .with_doc(
                r#"/**
 * Sends the weekly newsletter.
 *
 * @param Mailer  $mailer
 * @param String  $audience "config.audience"
 * @param Archive $archive
 */"#,
            ),
        ),
    )?;

    Ok(registry)
}

fn run() -> Result<(), DynError> {
    let registry = build_registry()?;

    let mut services = HashMap::new();
    services.insert(
        "SmtpTransport".to_string(),
        Instance::new(SmtpTransport {
            server: "smtp://localhost:2525".to_string(),
        }),
    );
    services.insert(
        "config.audience".to_string(),
        Instance::new("tech-weekly readers".to_string()),
    );

    // The lookup service owns composition: autowire the mailer first, then
    // register it so the newsletter can depend on it by name.
    let mailer = ReflectionAutowire::new(&services, &registry).instantiate("Mailer", Vec::new())?;
    println!("mailer: {:?}", mailer.downcast::<Mailer>()?);

    services.insert("Mailer".to_string(), mailer);

    let autowire = ReflectionAutowire::new(&services, &registry);

    let newsletter = autowire.instantiate("Newsletter", Vec::new())?;
    println!("newsletter: {:?}", newsletter.downcast::<Newsletter>()?);

    // Explicit leading argument: the mailer is handed over directly and only
    // the remaining parameters are resolved from the service.
    let custom_mailer = Instance::new(Mailer {
        transport: Arc::new(SmtpTransport {
            server: "smtp://backup:2525".to_string(),
        }),
    });
    let custom = autowire.instantiate("Newsletter", vec![custom_mailer])?;
    println!("custom newsletter: {:?}", custom.downcast::<Newsletter>()?);

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(()) => println!("Prototype ended without error"),
        Err(e) => eprintln!("Prototype ended with error: {e}"),
    }
}
