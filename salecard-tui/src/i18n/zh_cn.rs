//! 中文翻译 (zh-CN)

use super::keys::*;

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "促销卡片管理",
        yes: "是",
        no: "否",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
        },
        actions: ActionTexts {
            navigate: "导航",
            switch_panel: "切换面板",
            switch_option: "分类",
            submit: "提交",
            cancel_edit: "放弃编辑",
            open: "打开",
            edit: "编辑",
            delete: "删除",
            new: "新建",
            help: "帮助",
            quit: "退出",
        },
    },

    // ========================================================================
    // 侧边栏
    // ========================================================================
    nav: NavTexts {
        title: "图书",
        cards: "卡片",
    },

    // ========================================================================
    // 目录页面
    // ========================================================================
    catalog: CatalogTexts {
        form_title_new: "新建卡片",
        form_title_edit: "编辑卡片",
        table_title: "卡片",
        fields: CardFieldTexts {
            title: "标题",
            description: "描述",
            category: "分类",
            price: "价格",
            sale_price: "促销价",
            image: "图片",
        },
        columns: CardFieldTexts {
            title: "标题",
            description: "描述",
            category: "分类",
            price: "价格",
            sale_price: "促销价",
            image: "图片",
        },
        image_placeholder: "输入文件路径",
        submit: "提交",
        update: "更新",
        favorite: "收藏",
        sold: "已售",
        no_cards: "暂无卡片",
        no_image: "-",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        confirm_delete: ConfirmDeleteTexts {
            title: "删除卡片",
            message: "确定要删除",
            confirm_button: "删除",
            cancel_button: "取消",
        },
        alert_title: "错误",
        save_failed: "发生错误，请查看日志了解详情。",
        delete_failed: "删除卡片数据时出错",
        network_error: "网络错误，请重试。",
        dismiss_hint: "按 Enter 关闭",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status: StatusTexts {
        loading: "加载中...",
        saving: "保存中...",
        created: "卡片已创建",
        updated: "卡片已更新",
        deleting: "正在删除",
        deleted: "卡片已删除",
        editing: "正在编辑",
        edit_cancelled: "已放弃编辑",
        unlisted_category: "分类不在列表中，未修改时原样保留",
        numbers_only: "价格只能输入数字",
        card_count: "张卡片",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "帮助",
        global_shortcuts: "全局快捷键",
        form_shortcuts: "卡片表单",
        table_shortcuts: "卡片表格",
        close_hint: "按 Esc 关闭帮助",
        actions: HelpActionTexts {
            switch_panel: "切换面板",
            toggle_sidebar: "展开/收起侧边栏",
            refresh: "重新加载",
            help: "帮助",
            quit: "退出",
            move_field: "上/下一个字段",
            switch_category: "切换分类",
            submit: "提交",
            cancel_edit: "放弃编辑",
            move_up_down: "上下移动",
            edit: "编辑",
            delete: "删除",
            new: "新建卡片",
        },
    },
};
