//! Copy shown on the site.

use crate::route::ServiceId;

pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

pub const SECTIONS: &[Section] = &[
    Section { id: "inicio", label: "Início" },
    Section { id: "sobre", label: "Sobre" },
    Section { id: "servicos", label: "Serviços" },
    Section { id: "contato", label: "Contato" },
];

pub struct Service {
    pub id: u32,
    pub title: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub deliverables: &'static [&'static str],
}

impl Service {
    pub fn service_id(&self) -> Option<ServiceId> {
        ServiceId::new(self.id)
    }
}

pub const SERVICES: &[Service] = &[
    Service {
        id: 1,
        title: "Consultoria em Tecnologia",
        summary: "Diagnóstico da sua operação e um plano claro para a próxima etapa.",
        description: "Avaliamos processos, sistemas e equipe para identificar gargalos e oportunidades. \
            O resultado é um roteiro priorizado, com custos estimados e metas mensuráveis.",
        deliverables: &[
            "Mapeamento de processos e sistemas",
            "Relatório de riscos e oportunidades",
            "Roteiro de implantação em etapas",
        ],
    },
    Service {
        id: 2,
        title: "Desenvolvimento Web",
        summary: "Sites e sistemas sob medida, rápidos e fáceis de manter.",
        description: "Do protótipo à publicação, desenvolvemos aplicações web responsivas \
            com foco em desempenho, acessibilidade e segurança.",
        deliverables: &[
            "Protótipo navegável",
            "Aplicação publicada com monitoramento",
            "Documentação e treinamento da equipe",
        ],
    },
    Service {
        id: 3,
        title: "Suporte e Manutenção",
        summary: "Acompanhamento contínuo para manter tudo funcionando.",
        description: "Atendimento com prazos definidos, atualizações periódicas e \
            correções preventivas para que sua equipe não pare.",
        deliverables: &[
            "Atendimento em horário comercial",
            "Atualizações de segurança mensais",
            "Relatório trimestral de disponibilidade",
        ],
    },
    Service {
        id: 4,
        title: "Marketing Digital",
        summary: "Presença online que transforma visitas em contatos.",
        description: "Planejamos campanhas, conteúdo e otimização para buscadores \
            alinhados aos objetivos do seu negócio.",
        deliverables: &[
            "Plano de conteúdo trimestral",
            "Otimização para buscadores",
            "Painel de resultados das campanhas",
        ],
    },
];
