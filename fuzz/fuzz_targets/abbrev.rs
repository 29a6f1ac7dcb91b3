#![no_main]

use libfuzzer_sys::fuzz_target;
use ptk_utils::abbrev::{NameAbbrevService, NamespaceRegistration, TypeDescriptor, TypeRegistry};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let registry = TypeRegistry::new()
            .with_type(TypeDescriptor::class("pkg1.Node"))
            .with_type(TypeDescriptor::interface("pkg2.Node").implemented_by("pkg2.NodeImpl"))
            .with_type(TypeDescriptor::class("pkg2.NodeImpl").implements("pkg2.Node"));
        let mut service = NameAbbrevService::lenient(
            registry,
            [NamespaceRegistration::new("pkg1", "a"), NamespaceRegistration::new("pkg2", "b")],
        );

        // Neither direction may panic, whatever the input
        if let Ok(abbrev) = service.abbreviate_name(s) {
            if !abbrev.alias.is_empty() {
                let _ = service.resolve(&abbrev.short);
            }
        }
        let _ = service.resolve(s);
    }
});
