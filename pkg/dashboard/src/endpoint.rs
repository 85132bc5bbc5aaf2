use pkg_types::service::{LoadBalancerIngress, Service, ServicePort};
use serde::{Deserialize, Serialize};

/// A port exposed by an endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointPort {
    pub port: u16,
    pub protocol: String,
}

/// An address through which a replica set's pods can be reached.
///
/// Internal endpoints are named after the service and carry its namespace.
/// External endpoints are load-balancer ingress addresses and carry none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub host: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub ports: Vec<EndpointPort>,
}

fn endpoint_ports(ports: &[ServicePort]) -> Vec<EndpointPort> {
    ports
        .iter()
        .map(|p| EndpointPort {
            port: p.port,
            protocol: p.protocol.clone(),
        })
        .collect()
}

/// Cluster-local endpoint of a service.
pub fn internal_endpoint(svc: &Service) -> Endpoint {
    Endpoint {
        host: svc.name.clone(),
        namespace: Some(svc.namespace.clone()),
        ports: endpoint_ports(&svc.spec.ports),
    }
}

/// Endpoint for one load-balancer ingress entry of a service.
pub fn external_endpoint(ingress: &LoadBalancerIngress, ports: &[ServicePort]) -> Endpoint {
    Endpoint {
        host: ingress.address(),
        namespace: None,
        ports: endpoint_ports(ports),
    }
}

/// Internal and external endpoints of `services`, in service order and then
/// ingress order within a service.
pub fn service_endpoints(services: &[&Service]) -> (Vec<Endpoint>, Vec<Endpoint>) {
    let mut internal = Vec::with_capacity(services.len());
    let mut external = Vec::new();
    for svc in services {
        internal.push(internal_endpoint(svc));
        for ingress in &svc.status.load_balancer.ingress {
            external.push(external_endpoint(ingress, &svc.spec.ports));
        }
    }
    (internal, external)
}
