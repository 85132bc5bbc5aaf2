use serde::{Deserialize, Serialize};

/// Dashboard backend configuration file (YAML).
///
/// Example `dashboard.yaml`:
/// ```yaml
/// port: 9090
/// server: http://10.0.0.1:6443
/// token: my-secret-token
/// resources:
///   replicasets: replicasets
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfigFile {
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default, alias = "api-server")]
    pub server: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub resources: UpstreamResources,
}

/// Per-namespace collection names listed from the API server, i.e.
/// `GET /api/v1/namespaces/{ns}/{resource}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamResources {
    #[serde(default = "default_replicasets")]
    pub replicasets: String,
    #[serde(default = "default_services")]
    pub services: String,
    #[serde(default = "default_pods")]
    pub pods: String,
}

fn default_replicasets() -> String {
    pkg_constants::dashboard::REPLICASETS_RESOURCE.to_string()
}
fn default_services() -> String {
    pkg_constants::dashboard::SERVICES_RESOURCE.to_string()
}
fn default_pods() -> String {
    pkg_constants::dashboard::PODS_RESOURCE.to_string()
}

impl Default for UpstreamResources {
    fn default() -> Self {
        Self {
            replicasets: default_replicasets(),
            services: default_services(),
            pods: default_pods(),
        }
    }
}

/// Load a YAML config file, returning the default if the file doesn't exist.
pub fn load_config_file<T: serde::de::DeserializeOwned + Default>(path: &str) -> anyhow::Result<T> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(T::default());
        }
        Err(e) => return Err(e.into()),
    };
    let config: T = serde_yaml::from_str(&content)?;
    Ok(config)
}
