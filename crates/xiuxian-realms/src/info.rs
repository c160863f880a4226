//! Descriptive metadata for all five realms.
//!
//! Names, descriptions, and guidance text are carried in the source
//! domain's own language. The zhuji circuit is the one realm whose
//! guidance demands ordered activation, and its activation policy says so;
//! every other realm admits free-order activation.

use xiuxian_types::{ActivationOrder, Instructions, Realm, RealmInfo, VisualKind};

/// Build the metadata record for one realm.
pub fn realm_info(realm: Realm) -> RealmInfo {
    match realm {
        Realm::LianQi => RealmInfo {
            id: realm,
            name: "练气期".to_owned(),
            description: "修真的起始阶段，通过冥想和呼吸法感知天地间的灵气，逐步开启身体的经络系统。"
                .to_owned(),
            short_description: "感知灵气，开启经络".to_owned(),
            complexity_level: 1,
            visual: VisualKind::TwoD,
            order: ActivationOrder::Free,
            autoplay_interval_ms: 1500,
            instructions: Instructions {
                manual: "点击穴位激活经络，感受灵气在体内的流动".to_owned(),
                auto: "观看灵气自动在经络中运行，体验练气的奥妙".to_owned(),
            },
        },
        Realm::ZhuJi => RealmInfo {
            id: realm,
            name: "筑基期".to_owned(),
            description: "在练气期的基础上，进一步巩固根基，让经络形成稳定的循环系统。".to_owned(),
            short_description: "巩固根基，经络循环".to_owned(),
            complexity_level: 2,
            visual: VisualKind::TwoD,
            order: ActivationOrder::Sequential,
            autoplay_interval_ms: 1200,
            instructions: Instructions {
                manual: "按顺序激活穴位，建立稳定的经络循环".to_owned(),
                auto: "观看经络自动连接，形成完整的循环网络".to_owned(),
            },
        },
        Realm::JinDan => RealmInfo {
            id: realm,
            name: "金丹期".to_owned(),
            description: "突破二维限制，在丹田中凝聚金丹，形成三维立体的经络网络系统。".to_owned(),
            short_description: "凝聚金丹，3D网络".to_owned(),
            complexity_level: 3,
            visual: VisualKind::ThreeD,
            order: ActivationOrder::Free,
            autoplay_interval_ms: 1000,
            instructions: Instructions {
                manual: "在3D空间中点击穴位，构建立体经络网络".to_owned(),
                auto: "观看金丹自动凝聚，经络在三维空间中运行".to_owned(),
            },
        },
        Realm::YuanYing => RealmInfo {
            id: realm,
            name: "元婴期".to_owned(),
            description: "元婴诞生，生命力达到新的层次，如同细胞的生长演化过程。".to_owned(),
            short_description: "元婴诞生，生命演化".to_owned(),
            complexity_level: 4,
            visual: VisualKind::Grid,
            order: ActivationOrder::Free,
            autoplay_interval_ms: 600,
            instructions: Instructions {
                manual: "点击细胞控制生命演化，创造生命奇迹".to_owned(),
                auto: "观看生命自动演化，体验元婴的生机".to_owned(),
            },
        },
        Realm::HuaShen => RealmInfo {
            id: realm,
            name: "化神期".to_owned(),
            description: "神识超越肉体，进入高维空间，理解宇宙的深层奥秘。".to_owned(),
            short_description: "神识化形，高维超脱".to_owned(),
            complexity_level: 5,
            visual: VisualKind::ThreeD,
            order: ActivationOrder::Free,
            autoplay_interval_ms: 800,
            instructions: Instructions {
                manual: "探索高维几何体，感受超越三维的存在".to_owned(),
                auto: "观看高维形态变化，体验化神的超脱".to_owned(),
            },
        },
    }
}
