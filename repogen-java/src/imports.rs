//! Import-based name resolution.

use std::collections::HashMap;

/// Well-known members of JDK packages, for types imported on demand.
///
/// A type from `import pkg.*;` is only qualified when its package is known
/// to declare it: without a classpath, a name such as `CustomerId` may just
/// as well live in the entity's own package.
const JDK_TYPES: &[(&str, &[&str])] = &[
    (
        "java.util",
        &[
            "ArrayList", "Calendar", "Collection", "Currency", "Date", "HashMap", "HashSet",
            "LinkedList", "List", "Locale", "Map", "Optional", "Set", "SortedSet", "TimeZone",
            "TreeMap", "TreeSet", "UUID",
        ],
    ),
    ("java.math", &["BigDecimal", "BigInteger"]),
    (
        "java.time",
        &[
            "Duration", "Instant", "LocalDate", "LocalDateTime", "LocalTime", "MonthDay",
            "OffsetDateTime", "OffsetTime", "Period", "Year", "YearMonth", "ZoneId",
            "ZonedDateTime",
        ],
    ),
    ("java.sql", &["Blob", "Clob", "Date", "Time", "Timestamp"]),
    ("java.net", &["InetAddress", "URI", "URL"]),
    ("java.nio.file", &["Path"]),
];

fn jdk_declares(package: &str, name: &str) -> bool {
    JDK_TYPES
        .iter()
        .any(|(pkg, types)| *pkg == package && types.contains(&name))
}

/// Imports declared by a compilation unit.
///
/// Static imports are never recorded: they import members, not types.
#[derive(Debug, Clone, Default)]
pub struct ImportTable {
    /// Simple name to qualified name, from `import a.b.Name;`.
    single: HashMap<String, String>,
    /// Packages from `import a.b.*;`, in declaration order.
    on_demand: Vec<String>,
}

impl ImportTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `import <qualified>;`.
    pub fn add_single(&mut self, qualified: &str) {
        let simple = simple_name(qualified);
        self.single
            .insert(simple.to_string(), qualified.to_string());
    }

    /// Record `import <package>.*;`.
    pub fn add_on_demand(&mut self, package: &str) {
        if !self.on_demand.iter().any(|p| p == package) {
            self.on_demand.push(package.to_string());
        }
    }

    /// Resolve a type name as written in a field declaration.
    ///
    /// Qualified names are kept. A single-type import wins; otherwise the name
    /// is qualified when exactly one on-demand import is a JDK package known
    /// to declare it. Anything else stays as written, so `java.lang` types
    /// remain simple (`Long`, `String`).
    pub fn resolve_type(&self, name: &str) -> String {
        if name.contains('.') {
            return name.to_string();
        }
        if let Some(qualified) = self.single.get(name) {
            return qualified.clone();
        }

        let mut packages = self.on_demand.iter().filter(|pkg| jdk_declares(pkg, name));
        match (packages.next(), packages.next()) {
            (Some(pkg), None) => format!("{}.{}", pkg, name),
            _ => name.to_string(),
        }
    }

    /// Every qualified name an annotation usage may refer to.
    ///
    /// A single-type import is authoritative. Otherwise the name as written is
    /// kept and one candidate is added per on-demand import; the compiler
    /// guarantees at most one of those exists.
    pub fn resolve_annotation(&self, name: &str) -> Vec<String> {
        if name.contains('.') {
            return vec![name.to_string()];
        }
        if let Some(qualified) = self.single.get(name) {
            return vec![qualified.clone()];
        }

        let mut names = vec![name.to_string()];
        names.extend(self.on_demand.iter().map(|pkg| format!("{}.{}", pkg, name)));
        names
    }
}

/// Last segment of a dotted name.
pub(crate) fn simple_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}
